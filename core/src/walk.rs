//! Board traversal primitives.
//!
//! Rays and offset sets are plain iterators over on-board squares. Callers
//! decide where to stop (`find`, `take_while`, a `for` loop with `break`),
//! so no traversal carries state between calls.
use crate::types::{Color, Square};

/// Rook directions.
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

/// Bishop directions.
pub const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The two squares a pawn of `color` attacks, as offsets.
pub const fn pawn_attack_offsets(color: Color) -> [(i8, i8); 2] {
    let dr = color.pawn_direction();
    [(1, dr), (-1, dr)]
}

/// Squares visited stepping from `start` by a fixed vector, excluding
/// `start` itself, until the edge of the board.
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Square>,
    step: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.offset(self.step.0, self.step.1);
        Some(current)
    }
}

/// Walks from `start` in direction `step`.
pub fn ray(start: Square, step: (i8, i8)) -> Ray {
    Ray {
        next: start.offset(step.0, step.1),
        step,
    }
}

/// Every ray in `directions`, in order, each stopped by `blocked` after
/// yielding the blocking square.
///
/// This is the sliding-piece walk: empty squares are yielded, the first
/// occupied square is yielded and ends that direction.
pub fn slide<'a, F>(
    start: Square,
    directions: &'a [(i8, i8)],
    blocked: F,
) -> impl Iterator<Item = Square> + 'a
where
    F: Fn(Square) -> bool + Copy + 'a,
{
    directions.iter().flat_map(move |&step| {
        let mut stopped = false;
        ray(start, step).take_while(move |&square| {
            if stopped {
                return false;
            }
            stopped = blocked(square);
            true
        })
    })
}

/// The on-board squares among `start + offset` for each offset, in order.
pub fn offsets(start: Square, deltas: &[(i8, i8)]) -> impl Iterator<Item = Square> + '_ {
    deltas
        .iter()
        .filter_map(move |&(df, dr)| start.offset(df, dr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn names(squares: impl Iterator<Item = Square>) -> Vec<String> {
        squares.map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ray_stops_at_edge() {
        assert_eq!(names(ray(sq("f6"), (1, 1))), vec!["g7", "h8"]);
        assert_eq!(names(ray(sq("h8"), (1, 1))), Vec::<String>::new());
        assert_eq!(ray(sq("a1"), (0, 1)).count(), 7);
    }

    #[test]
    fn test_slide_includes_blocker() {
        let blockers = [sq("d6"), sq("f4")];
        let visited = names(slide(sq("d4"), &ORTHOGONALS, |s| blockers.contains(&s)));
        assert_eq!(
            visited,
            vec!["e4", "f4", "d5", "d6", "d3", "d2", "d1", "c4", "b4", "a4"]
        );
    }

    #[test]
    fn test_offset_sets_clip_to_board() {
        assert_eq!(offsets(sq("a1"), &KNIGHT_OFFSETS).count(), 2);
        assert_eq!(offsets(sq("d4"), &KNIGHT_OFFSETS).count(), 8);
        assert_eq!(offsets(sq("h8"), &KING_OFFSETS).count(), 3);
        assert_eq!(
            names(offsets(sq("e4"), &pawn_attack_offsets(Color::Black))),
            vec!["f3", "d3"]
        );
    }
}
