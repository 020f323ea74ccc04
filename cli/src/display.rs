use gambit_core::{Board, Color, File, GameOverStatus, Piece, PieceKind, Rank, Square, Termination};

/// Unicode glyph for a piece.
pub fn glyph(piece: Piece) -> char {
    match (piece.kind, piece.color) {
        (PieceKind::King, Color::White) => '♔',
        (PieceKind::Queen, Color::White) => '♕',
        (PieceKind::Rook, Color::White) => '♖',
        (PieceKind::Bishop, Color::White) => '♗',
        (PieceKind::Knight, Color::White) => '♘',
        (PieceKind::Pawn, Color::White) => '♙',
        (PieceKind::King, Color::Black) => '♚',
        (PieceKind::Queen, Color::Black) => '♛',
        (PieceKind::Rook, Color::Black) => '♜',
        (PieceKind::Bishop, Color::Black) => '♝',
        (PieceKind::Knight, Color::Black) => '♞',
        (PieceKind::Pawn, Color::Black) => '♟',
    }
}

pub fn kind_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "Pawn",
        PieceKind::Knight => "Knight",
        PieceKind::Bishop => "Bishop",
        PieceKind::Rook => "Rook",
        PieceKind::Queen => "Queen",
        PieceKind::King => "King",
    }
}

/// Squares of one rank, a to h.
pub fn rank_squares(rank: u8) -> impl Iterator<Item = Square> {
    (0..8).filter_map(move |file| Some(Square::new(File::new(file)?, Rank::new(rank)?)))
}

/// Plain text rendering of the board, White at the bottom. Uses letters
/// (uppercase for White) so the output survives any terminal or log file.
pub fn render(board: &Board) -> String {
    let mut out = String::from("  a b c d e f g h\n  ---------------\n");

    for rank in (0..8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for square in rank_squares(rank) {
            match board.piece_at(square) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push_str(&format!("| {}\n", rank + 1));
    }

    out.push_str("  ---------------\n  a b c d e f g h\n");
    out
}

/// One line per side: points captured and material left.
pub fn material(board: &Board) -> String {
    Color::ALL
        .iter()
        .map(|&color| {
            format!(
                "{}: captured {} | remaining {}",
                color,
                board.captured_points(color),
                board.remaining_points(color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable result, or `None` while the game goes on.
pub fn result(status: &GameOverStatus) -> Option<String> {
    let text = match (status.termination?, status.winner) {
        (Termination::Checkmate, Some(winner)) => format!("Checkmate! {} wins!", winner),
        (Termination::Checkmate, None) => String::from("Checkmate!"),
        (Termination::Stalemate, _) => String::from("Stalemate! The game is drawn."),
        (Termination::InsufficientMaterial, _) => {
            String::from("Only the kings are left. The game is drawn.")
        }
        (Termination::Agreement, _) => String::from("Draw agreed."),
    };
    Some(text)
}
