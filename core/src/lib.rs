pub mod attack;
pub mod board;
pub mod error;
pub mod execute;
pub mod game;
pub mod move_gen;
pub mod outcome;
pub mod pattern;
pub mod perft;
pub mod types;
pub mod validate;
pub mod walk;

pub use attack::{can_be_captured, is_in_check, is_legal_move, king_can_occupy};
pub use board::{Board, Probe};
pub use error::{RulesError, RulesResult};
pub use execute::{apply_move, promote, Execution};
pub use game::{Game, MoveReport, Phase};
pub use move_gen::{all_legal_moves, has_legal_move, legal_moves_from};
pub use outcome::{is_game_over, GameOverStatus, Termination};
pub use pattern::is_pattern_valid;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
pub use validate::is_valid_move;
