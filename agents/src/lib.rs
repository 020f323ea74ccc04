pub mod heuristic;
pub mod random;

use gambit_core::{Board, Color, Game, Move, MoveReport, PieceKind, RulesError, RulesResult, Square};

/// Core trait for chess agents
pub trait Agent {
    /// Choose a move for `color` on `board`, or `None` if there is none.
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Pick the kind a pawn on `square` becomes.
    fn choose_promotion(&mut self, board: &Board, square: Square) -> PieceKind;

    /// Answer a draw offer made against `color`.
    fn accepts_draw(&mut self, _board: &Board, _color: Color) -> bool {
        false
    }

    /// Get the agent's name
    fn name(&self) -> &str;
}

/// Lets `agent` play one full turn for the side to move, promotion included.
///
/// The agent only ever sees a snapshot; its move goes through the same
/// checks as any other submission.
pub fn play_turn<A>(game: &mut Game, agent: &mut A) -> RulesResult<MoveReport>
where
    A: Agent + ?Sized,
{
    if game.is_over() {
        return Err(RulesError::GameOver);
    }

    let snapshot = game.snapshot();
    let mv = agent
        .best_move(&snapshot, game.turn())
        .ok_or(RulesError::GameOver)?;
    let mut report = game.submit_move(mv.from, mv.to)?;

    if let Some(square) = report.promotion {
        let kind = agent.choose_promotion(&game.snapshot(), square);
        report.game_over = game.promote_pawn(square, kind)?;
    }

    Ok(report)
}

pub use heuristic::{HeuristicAgent, HeuristicWeights};
pub use random::RandomAgent;

#[cfg(test)]
mod tests {
    use super::*;
    use gambit_core::{Piece, Phase};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_agents_finish_games_cleanly() {
        let mut white = HeuristicAgent::with_seed(HeuristicWeights::default(), 1);
        let mut black = RandomAgent::with_seed(2);
        let mut game = Game::new();

        for _ in 0..120 {
            if game.is_over() {
                break;
            }
            if game.turn() == Color::White {
                play_turn(&mut game, &mut white).unwrap();
            } else {
                play_turn(&mut game, &mut black).unwrap();
            }
            assert!(!matches!(game.phase(), Phase::AwaitingPromotion(_)));
        }
    }

    #[test]
    fn test_play_turn_resolves_promotion() {
        let board = Board::from_pieces([
            (sq("e4"), Piece::new(PieceKind::King, Color::White)),
            (sq("a1"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("b2"), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ])
        .unwrap();
        let mut game = Game::from_board(board, Color::Black);
        let mut agent = HeuristicAgent::with_seed(HeuristicWeights::new(0.0, 0.0, 1.0), 3);

        // Taking the rook is the only move a pure capture scorer values.
        let report = play_turn(&mut game, &mut agent).unwrap();
        assert_eq!(report.execution.mv, Move::new(sq("b2"), sq("a1")));
        assert_eq!(report.promotion, Some(sq("a1")));

        let promoted = game.board().piece_at(sq("a1")).unwrap();
        assert_eq!(promoted.color, Color::Black);
        assert!(promoted.kind.is_promotion_target());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn test_play_turn_after_game_over() {
        let mut game = Game::new();
        game.offer_draw(Color::White, |_| true).unwrap();
        let mut agent = RandomAgent::with_seed(0);
        assert_eq!(play_turn(&mut game, &mut agent), Err(RulesError::GameOver));
    }
}
