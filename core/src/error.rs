//! Error types for the rules engine.
//!
//! Every condition a caller can trigger through the public API is a variant
//! here and is returned, never panicked on. Corruption of the board's own
//! invariants is not represented: that is a bug and is asserted instead.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

/// Errors produced by the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A coordinate outside the 8x8 board was supplied.
    #[error("invalid coordinate: ({file}, {rank}) is not on the board")]
    InvalidCoordinate { file: i8, rank: i8 },

    /// The piece at `from` cannot reach `to` (geometry, obstruction or occupancy).
    #[error("invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// The move is geometrically possible but leaves the mover's king attacked.
    #[error("illegal move: {from} to {to} leaves the king in check")]
    IllegalMove { from: Square, to: Square },

    /// The piece at `square` does not belong to the side to move.
    #[error("wrong turn: piece at {square} does not belong to {expected}")]
    WrongTurn { square: Square, expected: Color },

    /// The game has already reached a terminal state.
    #[error("the game is over")]
    GameOver,

    /// A pawn is waiting for its promotion choice.
    #[error("pawn on {square} must be promoted first")]
    PromotionPending { square: Square },

    /// `promote_pawn` was called for a square with no pending promotion.
    #[error("no promotion pending on {square}")]
    NoPendingPromotion { square: Square },

    /// Pawns can only become knights, bishops, rooks or queens.
    #[error("cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// A position must hold exactly one king per color.
    #[error("{color} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
}

/// Result type alias for rules engine operations.
pub type RulesResult<T> = Result<T, RulesError>;
