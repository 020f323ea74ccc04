//! Move-count regression: walks every legal line to a fixed depth.
//!
//! Each node is a fresh clone of its parent, so the walk never relies on the
//! probe guard it is partly there to check. A pawn reaching its last rank is
//! left unpromoted, which makes counts through promotions meaningless; use
//! promotion-free depths.
use crate::attack::is_in_check;
use crate::board::Board;
use crate::execute::apply_move;
use crate::move_gen::{all_legal_moves, has_legal_move};
use crate::types::{Color, Move};

/// Perft statistics for the leaf moves of a walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    pub en_passants: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passants += other.en_passants;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.checkmates += other.checkmates;
    }
}

/// Number of legal move sequences of length `depth` with `color` to move.
pub fn perft(board: &Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut scratch = board.clone();
    let moves = all_legal_moves(&mut scratch, color);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .filter_map(|mv| played(board, mv))
        .map(|next| perft(&next, color.opponent(), depth - 1))
        .sum()
}

/// Node count below each root move.
pub fn perft_divide(board: &Board, color: Color, depth: u8) -> Vec<(Move, u64)> {
    let mut scratch = board.clone();
    all_legal_moves(&mut scratch, color)
        .into_iter()
        .filter_map(|mv| {
            let next = played(board, mv)?;
            Some((mv, perft(&next, color.opponent(), depth.saturating_sub(1))))
        })
        .collect()
}

/// Perft with a breakdown of what the leaf moves do.
pub fn perft_detailed(board: &Board, color: Color, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();
    if depth == 0 {
        results.nodes = 1;
        return results;
    }

    let mut scratch = board.clone();
    for mv in all_legal_moves(&mut scratch, color) {
        let mut next = board.clone();
        let Ok(execution) = apply_move(&mut next, mv.from, mv.to) else {
            continue;
        };

        if depth > 1 {
            results.add(&perft_detailed(&next, color.opponent(), depth - 1));
            continue;
        }

        results.nodes += 1;
        if execution.captured.is_some() {
            results.captures += 1;
        }
        if execution.en_passant {
            results.en_passants += 1;
        }
        if execution.promotion.is_some() {
            results.promotions += 1;
        }
        if is_in_check(&mut next, color.opponent()) {
            results.checks += 1;
            if !has_legal_move(&mut next, color.opponent()) {
                results.checkmates += 1;
            }
        }
    }

    results
}

/// The position after `mv`, or `None` if it cannot be executed.
fn played(board: &Board, mv: Move) -> Option<Board> {
    let mut next = board.clone();
    let Ok(_) = apply_move(&mut next, mv.from, mv.to) else {
        return None;
    };
    Some(next)
}

/// Known counts from the starting position, White to move.
pub const STARTING_POSITION: &[(u8, u64)] = &[(1, 20), (2, 400), (3, 8902), (4, 197_281)];
