//! Applying moves to the board.
//!
//! These functions trust their caller: [`Game`](crate::game::Game) runs the
//! validator and the legality check first. Nothing here looks at king safety.
use tracing::debug;

use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::types::{Move, Piece, PieceKind, Square};

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Execution {
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece removed from the board, if any.
    pub captured: Option<Piece>,
    /// True when `captured` was taken en passant.
    pub en_passant: bool,
    /// Set when a pawn reached its last rank and must be promoted.
    pub promotion: Option<Square>,
}

/// Plays `from -> to` on the board.
///
/// Captured points are credited to the mover, an en passant victim is
/// removed, and the double-advance square is set or cleared: it never
/// survives past the next move.
pub fn apply_move(board: &mut Board, from: Square, to: Square) -> RulesResult<Execution> {
    let piece = board
        .piece_at(from)
        .ok_or(RulesError::InvalidMove { from, to })?;

    let victim = board.en_passant_victim(from, to);
    let captured = match victim {
        Some(square) => board.take(square),
        None => board.piece_at(to),
    };
    if let Some(taken) = captured {
        board.add_captured(piece.color, taken.points());
    }

    board.take(from);
    board.set_piece(to, Some(piece));

    let double_advance = piece.kind == PieceKind::Pawn
        && from.rank() == piece.color.pawn_rank()
        && from.delta(to) == (0, 2 * piece.color.pawn_direction());
    board.set_double_advance(double_advance.then_some(to));

    let promotion = (piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank())
        .then_some(to);

    debug!(
        color = %piece.color,
        mv = %Move::new(from, to),
        captured = ?captured.map(|p| p.kind),
        en_passant = victim.is_some(),
        promotion = promotion.is_some(),
        "move applied"
    );

    Ok(Execution {
        mv: Move::new(from, to),
        piece,
        captured,
        en_passant: victim.is_some(),
        promotion,
    })
}

/// Replaces the pawn on `square` with a piece of `kind`.
///
/// The pawn must be standing on its promotion rank.
pub fn promote(board: &mut Board, square: Square, kind: PieceKind) -> RulesResult<()> {
    if !kind.is_promotion_target() {
        return Err(RulesError::InvalidPromotion { kind });
    }

    match board.piece_at(square) {
        Some(pawn)
            if pawn.kind == PieceKind::Pawn && square.rank() == pawn.color.promotion_rank() =>
        {
            board.set_piece(square, Some(Piece::new(kind, pawn.color)));
            debug!(color = %pawn.color, %square, ?kind, "pawn promoted");
            Ok(())
        }
        _ => Err(RulesError::NoPendingPromotion { square }),
    }
}
