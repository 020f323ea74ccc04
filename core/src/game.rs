//! A game session: the live board, whose turn it is, and where the game
//! stands. This is the boundary front ends and agents talk to.
use tracing::{debug, trace};

use crate::attack::is_legal_move;
use crate::board::Board;
use crate::error::{RulesError, RulesResult};
use crate::execute::{apply_move, promote, Execution};
use crate::move_gen::{all_legal_moves, legal_moves_from};
use crate::outcome::{is_game_over, GameOverStatus, Termination};
use crate::types::{Color, Move, PieceKind, Square};
use crate::validate::is_valid_move;

/// Where the game stands between moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    InProgress,
    /// A pawn reached its last rank; the same side must choose its new kind.
    AwaitingPromotion(Square),
    Terminal(GameOverStatus),
}

/// Outcome of an accepted move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveReport {
    pub execution: Execution,
    /// Square waiting for [`Game::promote_pawn`], if any.
    pub promotion: Option<Square>,
    /// Status after the move. Not final while a promotion is pending.
    pub game_over: GameOverStatus,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    history: Vec<Move>,
}

impl Game {
    /// A new game from the starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            phase: Phase::InProgress,
            history: Vec::new(),
        }
    }

    /// A game from an arbitrary position with `turn` to move.
    ///
    /// The position is examined up front, so a game can start already over.
    pub fn from_board(mut board: Board, turn: Color) -> Self {
        let status = is_game_over(&mut board, turn.opponent());
        let phase = if status.is_over {
            Phase::Terminal(status)
        } else {
            Phase::InProgress
        };

        Self {
            board,
            turn,
            phase,
            history: Vec::new(),
        }
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current game-over status.
    pub fn status(&self) -> GameOverStatus {
        match self.phase {
            Phase::Terminal(status) => status,
            _ => GameOverStatus::in_progress(),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Terminal(_))
    }

    /// Moves accepted so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Read-only view of the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// An independent copy of the board. Changing it never affects the game.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Legal moves for the side to move. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.phase != Phase::InProgress {
            return Vec::new();
        }
        all_legal_moves(&mut self.snapshot(), self.turn)
    }

    /// Legal moves of the piece on `square`, if it belongs to the side to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        if self.phase != Phase::InProgress || !self.board.is_color(square, self.turn) {
            return Vec::new();
        }
        legal_moves_from(&mut self.snapshot(), square)
    }

    /// Plays `from -> to` for the side to move.
    ///
    /// On success the turn passes, unless the move promotes a pawn: then the
    /// game waits for [`promote_pawn`](Self::promote_pawn) first.
    pub fn submit_move(&mut self, from: Square, to: Square) -> RulesResult<MoveReport> {
        let result = self.try_submit(from, to);
        if let Err(error) = &result {
            trace!(color = %self.turn, %from, %to, %error, "move rejected");
        }
        result
    }

    fn try_submit(&mut self, from: Square, to: Square) -> RulesResult<MoveReport> {
        match self.phase {
            Phase::Terminal(_) => return Err(RulesError::GameOver),
            Phase::AwaitingPromotion(square) => {
                return Err(RulesError::PromotionPending { square })
            }
            Phase::InProgress => {}
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(RulesError::InvalidMove { from, to })?;
        if piece.color != self.turn {
            return Err(RulesError::WrongTurn {
                square: from,
                expected: self.turn,
            });
        }
        if !is_valid_move(&mut self.board, from, to) {
            return Err(RulesError::InvalidMove { from, to });
        }
        if !is_legal_move(&mut self.board, from, to) {
            return Err(RulesError::IllegalMove { from, to });
        }

        let execution = apply_move(&mut self.board, from, to)?;
        self.history.push(execution.mv);

        if let Some(square) = execution.promotion {
            self.phase = Phase::AwaitingPromotion(square);
            return Ok(MoveReport {
                execution,
                promotion: Some(square),
                game_over: GameOverStatus::in_progress(),
            });
        }

        let game_over = self.finish_turn();
        Ok(MoveReport {
            execution,
            promotion: None,
            game_over,
        })
    }

    /// Completes a pending promotion with `kind`, then passes the turn.
    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) -> RulesResult<GameOverStatus> {
        if self.phase != Phase::AwaitingPromotion(square) {
            return Err(RulesError::NoPendingPromotion { square });
        }

        promote(&mut self.board, square, kind)?;
        Ok(self.finish_turn())
    }

    /// `by` offers a draw; `decide` answers for the other side.
    ///
    /// Returns whether the offer was accepted. An accepted offer ends the game.
    /// Offers are only possible while the game is in progress.
    pub fn offer_draw<F>(&mut self, by: Color, decide: F) -> RulesResult<bool>
    where
        F: FnOnce(Color) -> bool,
    {
        match self.phase {
            Phase::Terminal(_) => return Err(RulesError::GameOver),
            Phase::AwaitingPromotion(square) => {
                return Err(RulesError::PromotionPending { square })
            }
            Phase::InProgress => {}
        }

        let accepted = decide(by.opponent());
        debug!(%by, accepted, "draw offered");
        if accepted {
            self.phase = Phase::Terminal(GameOverStatus::draw(Termination::Agreement));
        }
        Ok(accepted)
    }

    /// Examines the opponent's position and either ends the game or hands
    /// over the move.
    fn finish_turn(&mut self) -> GameOverStatus {
        let status = is_game_over(&mut self.board, self.turn);
        if status.is_over {
            debug!(termination = ?status.termination, winner = ?status.winner, "game over");
            self.phase = Phase::Terminal(status);
        } else {
            self.phase = Phase::InProgress;
            self.turn = self.turn.opponent();
        }
        status
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
