//! Board state: the 8x8 grid plus the counters derived from play.
use std::ops::{Deref, DerefMut};

use crate::error::{RulesError, RulesResult};
use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state.
///
/// Holds at most one piece per square, the points each side has captured,
/// the destination of the last double pawn advance (meaningful for exactly
/// one ply) and the square of each side's king.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 64 squares, indexed by Square::index()
    squares: [Option<Piece>; 64],
    /// Points captured by each color
    captured: [u32; 2],
    /// Destination of a pawn that advanced two squares on the previous ply
    double_advance: Option<Square>,
    /// King square per color
    kings: [Square; 2],
}

impl Board {
    fn blank() -> Self {
        Self {
            squares: [None; 64],
            captured: [0; 2],
            double_advance: None,
            kings: [Square::E1, Square::E8],
        }
    }

    /// Creates the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::blank();

        for square in Square::all() {
            let color = match square.rank().index() {
                0 | 1 => Color::White,
                6 | 7 => Color::Black,
                _ => continue,
            };
            let kind = if square.rank() == color.pawn_rank() {
                PieceKind::Pawn
            } else {
                BACK_RANK[square.file().index() as usize]
            };
            board.set_piece(square, Some(Piece::new(kind, color)));
        }

        board
    }

    /// Builds an arbitrary position. Each side must have exactly one king.
    pub fn from_pieces<I>(pieces: I) -> RulesResult<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::blank();
        for (square, piece) in pieces {
            board.set_piece(square, Some(piece));
        }

        for color in Color::ALL {
            let count = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if count != 1 {
                return Err(RulesError::KingCount { color, count });
            }
        }

        Ok(board)
    }

    /// Gets the piece at the given square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Returns true if the given square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Returns true if the given square contains a piece of the given color.
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Returns true if the given square contains a piece of the other color.
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.is_color(square, color.opponent())
    }

    /// Square of the given color's king.
    pub fn king_square(&self, color: Color) -> Square {
        let square = self.kings[color.index()];
        debug_assert_eq!(
            self.piece_at(square),
            Some(Piece::new(PieceKind::King, color)),
            "king tracking out of sync"
        );
        square
    }

    /// Points the given color has captured so far.
    pub fn captured_points(&self, color: Color) -> u32 {
        self.captured[color.index()]
    }

    /// Total point value of the given color's pieces still on the board.
    pub fn remaining_points(&self, color: Color) -> u32 {
        self.pieces_of(color).map(|(_, piece)| piece.points()).sum()
    }

    /// Destination of the previous ply's double pawn advance, if any.
    pub fn double_advance(&self) -> Option<Square> {
        self.double_advance
    }

    /// All occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    /// Occupied squares of one color in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns true if nothing but the two kings is left.
    pub fn only_kings(&self) -> bool {
        self.pieces().all(|(_, piece)| piece.kind == PieceKind::King)
    }

    /// If `from -> to` is an en passant capture, the square of the pawn it
    /// removes.
    ///
    /// The mover must be a pawn stepping one square diagonally forward onto an
    /// empty square, and the square beside it (same rank as `from`, same file
    /// as `to`) must hold an enemy pawn that double-advanced on the previous ply.
    pub fn en_passant_victim(&self, from: Square, to: Square) -> Option<Square> {
        let pawn = self.piece_at(from).filter(|p| p.kind == PieceKind::Pawn)?;
        let (df, dr) = from.delta(to);
        if df.abs() != 1 || dr != pawn.color.pawn_direction() || !self.is_empty(to) {
            return None;
        }

        let victim = Square::new(to.file(), from.rank());
        let is_enemy_pawn = self.piece_at(victim)
            == Some(Piece::new(PieceKind::Pawn, pawn.color.opponent()));
        (self.double_advance == Some(victim) && is_enemy_pawn).then_some(victim)
    }

    /// Temporarily plays `from -> to` without any rule checks.
    ///
    /// The piece on `from` is placed on `to`, replacing any occupant; an en
    /// passant victim is lifted as well. Everything is put back when the
    /// returned guard is dropped, on every exit path.
    pub fn probe(&mut self, from: Square, to: Square) -> Probe<'_> {
        let kings = self.kings;
        let victim = self
            .en_passant_victim(from, to)
            .and_then(|square| self.take(square).map(|piece| (square, piece)));
        let moved = self.take(from);
        let taken = self.take(to);
        self.set_piece(to, moved);

        Probe {
            board: self,
            from,
            to,
            moved,
            taken,
            victim,
            kings,
        }
    }

    /// Sets the piece at the given square, keeping king tracking current.
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(Piece {
            kind: PieceKind::King,
            color,
        }) = piece
        {
            self.kings[color.index()] = square;
        }
        self.squares[square.index() as usize] = piece;
    }

    /// Removes and returns the piece at the given square.
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize].take()
    }

    pub(crate) fn add_captured(&mut self, color: Color, points: u32) {
        self.captured[color.index()] += points;
    }

    pub(crate) fn set_double_advance(&mut self, square: Option<Square>) {
        self.double_advance = square;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A move played on a board for inspection only. Derefs to the board in its
/// moved state; dropping it restores the board exactly.
pub struct Probe<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    taken: Option<Piece>,
    victim: Option<(Square, Piece)>,
    kings: [Square; 2],
}

impl Probe<'_> {
    /// Piece that occupied the destination before the probe.
    pub fn taken(&self) -> Option<Piece> {
        self.taken
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        // `to` first: when from == to the origin must win.
        self.board.squares[self.to.index() as usize] = self.taken;
        self.board.squares[self.from.index() as usize] = self.moved;
        if let Some((square, piece)) = self.victim {
            self.board.squares[square.index() as usize] = Some(piece);
        }
        self.board.kings = self.kings;
    }
}
