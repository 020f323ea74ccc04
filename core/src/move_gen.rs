use crate::attack::{is_legal_move, king_can_occupy};
use crate::board::Board;
use crate::types::{Color, Move, Piece, PieceKind, Square};
use crate::walk::{
    offsets, pawn_attack_offsets, slide, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS,
};

/// Generates all legal moves for `color`.
///
/// Order is deterministic: origin squares file by file (a1, a2, ... h8),
/// then each piece's own generation order. The heuristic agent keeps the
/// first of equally scored moves, so this order decides its ties.
pub fn all_legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in origins(board, color) {
        moves.extend(legal_moves_from(board, from));
    }
    moves
}

/// Generates the legal moves of the piece on `from` (none if it is empty).
pub fn legal_moves_from(board: &mut Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    generate_pseudo_legal_targets(board, from, piece)
        .into_iter()
        .filter(|&to| is_legal_move(board, from, to))
        .map(|to| Move::new(from, to))
        .collect()
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    origins(board, color)
        .into_iter()
        .any(|from| !legal_moves_from(board, from).is_empty())
}

/// Squares holding `color`'s pieces, in scan order.
fn origins(board: &Board, color: Color) -> Vec<Square> {
    Square::by_file()
        .filter(|&square| board.is_color(square, color))
        .collect()
}

/// Destination squares for the piece on `from`, before king safety.
fn generate_pseudo_legal_targets(board: &mut Board, from: Square, piece: Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_targets(board, from, piece.color),
        PieceKind::Knight => offsets(from, &KNIGHT_OFFSETS)
            .filter(|&to| can_land(board, to, piece.color))
            .collect(),
        PieceKind::Bishop => generate_sliding_targets(board, from, piece.color, &DIAGONALS),
        PieceKind::Rook => generate_sliding_targets(board, from, piece.color, &ORTHOGONALS),
        PieceKind::Queen => {
            let mut targets = generate_sliding_targets(board, from, piece.color, &DIAGONALS);
            targets.extend(generate_sliding_targets(board, from, piece.color, &ORTHOGONALS));
            targets
        }
        PieceKind::King => {
            let steps: Vec<Square> = offsets(from, &KING_OFFSETS)
                .filter(|&to| can_land(board, to, piece.color))
                .collect();
            steps
                .into_iter()
                .filter(|&to| king_can_occupy(board, from, to))
                .collect()
        }
    }
}

/// Empty squares or enemy pieces other than the king.
fn can_land(board: &Board, to: Square, color: Color) -> bool {
    match board.piece_at(to) {
        None => true,
        Some(p) => p.color != color && p.kind != PieceKind::King,
    }
}

/// Empty squares along each ray plus the first occupied one, if it can be taken.
fn generate_sliding_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    slide(from, directions, |square| !board.is_empty(square))
        .filter(|&to| can_land(board, to, color))
        .collect()
}

/// Single and double advances, then the capture diagonals (toward the h-file
/// first) including en passant.
fn generate_pawn_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let direction = color.pawn_direction();
    let mut targets = Vec::new();

    if let Some(single) = from.offset(0, direction).filter(|&s| board.is_empty(s)) {
        targets.push(single);

        if from.rank() == color.pawn_rank() {
            if let Some(double) = from.offset(0, 2 * direction).filter(|&s| board.is_empty(s)) {
                targets.push(double);
            }
        }
    }

    for to in offsets(from, &pawn_attack_offsets(color)) {
        let capture = board.is_enemy(to, color) && can_land(board, to, color);
        if capture || board.en_passant_victim(from, to).is_some() {
            targets.push(to);
        }
    }

    targets
}
