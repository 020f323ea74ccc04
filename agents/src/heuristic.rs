//! Single-ply heuristic agent.
//!
//! Every legal move is played on a probe, the resulting position is scored
//! for threats made and threats suffered, and the probe is dropped. Captures
//! are scored on the position before the move. The highest score wins; on a
//! tie the first move in generation order is kept.
use crate::Agent;
use gambit_core::{
    all_legal_moves, can_be_captured, is_legal_move, is_valid_move, Board, Color, Move, PieceKind,
    Square,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

/// Relative weights of the three scoring terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicWeights {
    pub threat: f64,
    pub defense: f64,
    pub take: f64,
}

impl HeuristicWeights {
    pub const fn new(threat: f64, defense: f64, take: f64) -> Self {
        Self {
            threat,
            defense,
            take,
        }
    }

    /// Scales the weights to sum to one.
    ///
    /// Negative, non-finite or all-zero weights cannot be scaled and give the
    /// normalized defaults instead.
    pub fn normalized(self) -> Self {
        let terms = [self.threat, self.defense, self.take];
        let total: f64 = terms.iter().sum();

        if terms.iter().all(|w| w.is_finite() && *w >= 0.0) && total > 0.0 {
            Self::new(self.threat / total, self.defense / total, self.take / total)
        } else {
            Self::default().normalized()
        }
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::new(3.0, 1.0, 2.0)
    }
}

pub struct HeuristicAgent {
    name: String,
    weights: HeuristicWeights,
    rng: StdRng,
    /// Heuristic selections allowed before falling back to random play.
    heuristic_turns: Option<u32>,
    turns_taken: u32,
}

impl HeuristicAgent {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self::with_rng(weights, StdRng::from_entropy())
    }

    /// Agent whose random choices (promotions, fallback moves) are reproducible.
    pub fn with_seed(weights: HeuristicWeights, seed: u64) -> Self {
        Self::with_rng(weights, StdRng::seed_from_u64(seed))
    }

    fn with_rng(weights: HeuristicWeights, rng: StdRng) -> Self {
        let weights = weights.normalized();
        HeuristicAgent {
            name: format!(
                "Heuristic(threat={:.2}, defense={:.2}, take={:.2})",
                weights.threat, weights.defense, weights.take
            ),
            weights,
            rng,
            heuristic_turns: None,
            turns_taken: 0,
        }
    }

    /// Limits the heuristic phase to `turns` selections; `None` never ends it.
    pub fn heuristic_turns(mut self, turns: Option<u32>) -> Self {
        self.heuristic_turns = turns;
        self
    }

    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }

    fn in_heuristic_phase(&self) -> bool {
        self.heuristic_turns
            .map_or(true, |turns| self.turns_taken < turns)
    }

    /// Weighted score of playing `mv`, or `None` if it cannot be scored.
    pub fn score_move(&self, board: &mut Board, color: Color, mv: Move) -> Option<f64> {
        let take = take_score(board, mv);

        let mut probe = board.probe(mv.from, mv.to);
        let threat = threat_score(&mut probe, color)?;
        let defense = threat_score(&mut probe, color.opponent())?;

        let w = self.weights;
        Some(w.threat * threat + w.defense * defense + w.take * take)
    }

    /// Left-to-right scan keeping the strictly greatest score.
    fn select(&self, board: &mut Board, color: Color, moves: &[Move]) -> Option<(Move, f64)> {
        let mut best = None;
        let mut maximum = -1.0;

        for &mv in moves {
            let Some(score) = self.score_move(board, color, mv) else {
                warn!(%mv, "unable to score move");
                continue;
            };
            if score > maximum {
                maximum = score;
                best = Some(mv);
            }
        }

        best.map(|mv| (mv, maximum))
    }

    /// Uniform draw from `moves`, redrawn until the move checks out.
    fn random_move(&mut self, board: &mut Board, moves: &[Move]) -> Option<Move> {
        loop {
            let mv = *moves.choose(&mut self.rng)?;
            if is_valid_move(board, mv.from, mv.to) && is_legal_move(board, mv.from, mv.to) {
                return Some(mv);
            }
        }
    }
}

impl Agent for HeuristicAgent {
    fn best_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut board = board.clone();
        let moves = all_legal_moves(&mut board, color);
        if moves.is_empty() {
            return None;
        }

        if self.in_heuristic_phase() {
            self.turns_taken = self.turns_taken.saturating_add(1);
            if let Some((mv, score)) = self.select(&mut board, color, &moves) {
                debug!(%color, %mv, score, candidates = moves.len(), "heuristic move");
                return Some(mv);
            }
        }

        warn!(%color, "fell out of phases, picking a random move");
        self.random_move(&mut board, &moves)
    }

    fn choose_promotion(&mut self, _board: &Board, _square: Square) -> PieceKind {
        PieceKind::PROMOTIONS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }

    /// Accepts when behind on material.
    fn accepts_draw(&mut self, board: &Board, color: Color) -> bool {
        board.remaining_points(color) < board.remaining_points(color.opponent())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Value of the opposing pieces `color` could capture, relative to what
/// `color` has left. Each piece counts once however many attackers it has.
pub fn threat_score(board: &mut Board, color: Color) -> Option<f64> {
    let own = board.remaining_points(color);
    if own == 0 {
        return None;
    }

    let targets: Vec<_> = board.pieces_of(color.opponent()).collect();
    let threatened: u32 = targets
        .into_iter()
        .filter(|&(square, _)| can_be_captured(board, square))
        .map(|(_, piece)| piece.points())
        .sum();

    Some(f64::from(threatened) / f64::from(own))
}

/// `(captured - moving + 8) / 16` for a capture, zero otherwise.
pub fn take_score(board: &Board, mv: Move) -> f64 {
    let Some(mover) = board.piece_at(mv.from) else {
        return 0.0;
    };
    let captured = match board.en_passant_victim(mv.from, mv.to) {
        Some(victim) => board.piece_at(victim),
        None => board.piece_at(mv.to).filter(|p| p.color != mover.color),
    };

    captured.map_or(0.0, |taken| {
        (f64::from(taken.points()) - f64::from(mover.points()) + 8.0) / 16.0
    })
}
