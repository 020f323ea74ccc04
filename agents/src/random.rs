use crate::Agent;
use gambit_core::{all_legal_moves, Board, Color, Move, PieceKind, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays uniformly random legal moves.
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            name: format!("Random(seed={})", seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = all_legal_moves(&mut board.clone(), color);
        moves.choose(&mut self.rng).copied()
    }

    fn choose_promotion(&mut self, _board: &Board, _square: Square) -> PieceKind {
        PieceKind::PROMOTIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);

        for _ in 0..10 {
            assert_eq!(
                a.best_move(&board, Color::White),
                b.best_move(&board, Color::White)
            );
        }
    }

    #[test]
    fn test_moves_are_legal() {
        let board = Board::new();
        let legal = all_legal_moves(&mut board.clone(), Color::Black);
        let mut agent = RandomAgent::new();

        for _ in 0..20 {
            let mv = agent.best_move(&board, Color::Black).unwrap();
            assert!(legal.contains(&mv));
        }
    }
}
