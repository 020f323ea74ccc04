//! Game-over detection.
use crate::attack::is_in_check;
use crate::board::Board;
use crate::move_gen::has_legal_move;
use crate::types::Color;

/// Why a game ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Termination {
    Checkmate,
    Stalemate,
    /// Only the two kings are left.
    InsufficientMaterial,
    /// A draw offer was accepted.
    Agreement,
}

/// Whether the game has ended, and how.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct GameOverStatus {
    pub is_over: bool,
    pub is_checkmate: bool,
    pub is_draw: bool,
    pub winner: Option<Color>,
    pub termination: Option<Termination>,
}

impl GameOverStatus {
    /// The game goes on.
    pub const fn in_progress() -> Self {
        Self {
            is_over: false,
            is_checkmate: false,
            is_draw: false,
            winner: None,
            termination: None,
        }
    }

    /// `winner` has mated the other side.
    pub const fn checkmate(winner: Color) -> Self {
        Self {
            is_over: true,
            is_checkmate: true,
            is_draw: false,
            winner: Some(winner),
            termination: Some(Termination::Checkmate),
        }
    }

    /// A drawn game, for any of the drawing terminations.
    pub const fn draw(termination: Termination) -> Self {
        Self {
            is_over: true,
            is_checkmate: false,
            is_draw: true,
            winner: None,
            termination: Some(termination),
        }
    }
}

/// Examines the position after `just_moved` has played.
///
/// Only the side about to move can be out of moves, so only it is checked.
/// A bare-kings board is drawn whatever the move situation.
pub fn is_game_over(board: &mut Board, just_moved: Color) -> GameOverStatus {
    if board.only_kings() {
        return GameOverStatus::draw(Termination::InsufficientMaterial);
    }

    let opponent = just_moved.opponent();
    if has_legal_move(board, opponent) {
        return GameOverStatus::in_progress();
    }

    if is_in_check(board, opponent) {
        GameOverStatus::checkmate(just_moved)
    } else {
        GameOverStatus::draw(Termination::Stalemate)
    }
}
