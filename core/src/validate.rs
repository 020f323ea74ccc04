//! Pseudo-legality: geometry, obstruction and occupancy, but not king safety
//! (except for the king's own move, which must not land on an attacked square).
use crate::attack::king_can_occupy;
use crate::board::Board;
use crate::pattern::is_pattern_valid;
use crate::types::{PieceKind, Square};
use crate::walk::{ray, DIAGONALS, ORTHOGONALS};

/// Returns true if the piece on `from` may move to `to` as far as its own
/// movement rules and the pieces in its way are concerned.
///
/// Kings are never valid capture targets. Takes `&mut Board` because king
/// moves are checked by simulation; the board is left unchanged.
pub fn is_valid_move(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if !is_pattern_valid(piece.kind, piece.color, from, to) {
        return false;
    }
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color || target.kind == PieceKind::King {
            return false;
        }
    }

    match piece.kind {
        PieceKind::King => king_can_occupy(board, from, to),
        PieceKind::Queen => {
            reaches(board, from, to, &DIAGONALS) || reaches(board, from, to, &ORTHOGONALS)
        }
        PieceKind::Bishop => reaches(board, from, to, &DIAGONALS),
        PieceKind::Rook => reaches(board, from, to, &ORTHOGONALS),
        // Nothing can block a knight.
        PieceKind::Knight => true,
        PieceKind::Pawn => is_valid_pawn_move(board, from, to),
    }
}

/// True if walking any of `directions` from `from` hits `to` before any
/// occupied square.
fn reaches(board: &Board, from: Square, to: Square, directions: &[(i8, i8)]) -> bool {
    directions.iter().any(|&step| {
        ray(from, step).find(|&square| square == to || !board.is_empty(square)) == Some(to)
    })
}

/// Pawn rules on top of the pattern: diagonals only capture (or take en
/// passant), straight moves need empty squares all the way.
fn is_valid_pawn_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    if df != 0 {
        return !board.is_empty(to) || board.en_passant_victim(from, to).is_some();
    }

    match dr.abs() {
        1 => board.is_empty(to),
        2 => from
            .offset(0, dr / 2)
            .is_some_and(|middle| board.is_empty(middle) && board.is_empty(to)),
        _ => false,
    }
}
