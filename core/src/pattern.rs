//! Per-kind movement geometry, ignoring every other piece on the board.
use crate::types::{Color, PieceKind, Square};

/// Could a piece of `kind` and `color` move from `from` to `to` on an
/// otherwise empty board?
///
/// Pawn diagonals are accepted here; whether a capture is actually available
/// is the validator's concern.
pub fn is_pattern_valid(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    let (adf, adr) = (df.abs(), dr.abs());

    match kind {
        PieceKind::Pawn => {
            let forward = dr * color.pawn_direction();
            match (adf, forward) {
                (0, 1) | (1, 1) => true,
                (0, 2) => from.rank() == color.pawn_rank(),
                _ => false,
            }
        }
        PieceKind::Knight => matches!((adf, adr), (1, 2) | (2, 1)),
        PieceKind::Bishop => is_diagonal(adf, adr),
        PieceKind::Rook => is_straight(adf, adr),
        PieceKind::Queen => is_diagonal(adf, adr) || is_straight(adf, adr),
        PieceKind::King => adf <= 1 && adr <= 1 && (adf, adr) != (0, 0),
    }
}

fn is_diagonal(adf: i8, adr: i8) -> bool {
    adf == adr && adf != 0
}

fn is_straight(adf: i8, adr: i8) -> bool {
    (adf == 0) != (adr == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const KINDS: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    /// Independent formulation using squared distances and slopes.
    fn reference(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
        let fx = i32::from(from.file().index());
        let fy = i32::from(from.rank().index());
        let tx = i32::from(to.file().index());
        let ty = i32::from(to.rank().index());
        let (dx, dy) = (tx - fx, ty - fy);
        let dist2 = dx * dx + dy * dy;
        let along_line = dx == 0 || dy == 0;
        let along_diag = dx * dx == dy * dy;

        match kind {
            PieceKind::Pawn => {
                let ahead = if color == Color::White { dy } else { -dy };
                let home = if color == Color::White { 1 } else { 6 };
                (ahead == 1 && dx * dx <= 1) || (ahead == 2 && dx == 0 && fy == home)
            }
            PieceKind::Knight => dist2 == 5,
            PieceKind::Bishop => dist2 > 0 && along_diag,
            PieceKind::Rook => dist2 > 0 && along_line,
            PieceKind::Queen => dist2 > 0 && (along_line || along_diag),
            PieceKind::King => dist2 == 1 || dist2 == 2,
        }
    }

    #[test]
    fn test_matches_reference_on_random_triples() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..20_000 {
            let kind = KINDS[rng.gen_range(0..KINDS.len())];
            let color = if rng.gen_bool(0.5) {
                Color::White
            } else {
                Color::Black
            };
            let from = Square::from_index(rng.gen_range(0..64)).unwrap();
            let to = Square::from_index(rng.gen_range(0..64)).unwrap();

            assert_eq!(
                is_pattern_valid(kind, color, from, to),
                reference(kind, color, from, to),
                "{:?} {:?} {} -> {}",
                kind,
                color,
                from,
                to
            );
        }
    }

    #[test]
    fn test_matches_reference_exhaustively() {
        for kind in KINDS {
            for color in Color::ALL {
                for from in Square::all() {
                    for to in Square::all() {
                        assert_eq!(
                            is_pattern_valid(kind, color, from, to),
                            reference(kind, color, from, to)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pawn_direction_and_double_step() {
        assert!(is_pattern_valid(PieceKind::Pawn, Color::White, sq("e2"), sq("e4")));
        assert!(!is_pattern_valid(PieceKind::Pawn, Color::White, sq("e3"), sq("e5")));
        assert!(!is_pattern_valid(PieceKind::Pawn, Color::White, sq("e4"), sq("e3")));
        assert!(is_pattern_valid(PieceKind::Pawn, Color::Black, sq("d7"), sq("d5")));
        assert!(is_pattern_valid(PieceKind::Pawn, Color::Black, sq("d7"), sq("c6")));
        assert!(!is_pattern_valid(PieceKind::Pawn, Color::Black, sq("d7"), sq("c8")));
    }

    #[test]
    fn test_null_move_is_never_valid() {
        for kind in KINDS {
            assert!(!is_pattern_valid(kind, Color::White, sq("d4"), sq("d4")));
        }
    }

    #[test]
    fn test_king_steps_orthogonally_too() {
        assert!(is_pattern_valid(PieceKind::King, Color::White, sq("e1"), sq("e2")));
        assert!(is_pattern_valid(PieceKind::King, Color::White, sq("e1"), sq("f2")));
        assert!(!is_pattern_valid(PieceKind::King, Color::White, sq("e1"), sq("g1")));
    }
}
