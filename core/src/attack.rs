//! Attack detection and king safety.
//!
//! Attacks are found by looking outward from the target square (rays, knight
//! jumps, pawn diagonals, king steps) rather than by generating the
//! attacker's moves. Anything that needs to know "what if" plays the move
//! with [`Board::probe`], which puts the board back when it goes out of scope.
use crate::board::Board;
use crate::types::{Color, Piece, PieceKind, Square};
use crate::walk::{
    offsets, pawn_attack_offsets, ray, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS,
};

/// Returns true if the piece on `square` could be captured by the other side.
///
/// An empty square is never capturable. An adjacent enemy king only counts
/// if it could take without itself becoming capturable.
pub fn can_be_captured(board: &mut Board, square: Square) -> bool {
    let Some(target) = board.piece_at(square) else {
        return false;
    };
    let attacker = target.color.opponent();

    if attacked_along(board, square, &ORTHOGONALS, Piece::new(PieceKind::Rook, attacker))
        || attacked_along(board, square, &DIAGONALS, Piece::new(PieceKind::Bishop, attacker))
    {
        return true;
    }

    let knight = Piece::new(PieceKind::Knight, attacker);
    if offsets(square, &KNIGHT_OFFSETS).any(|s| board.piece_at(s) == Some(knight)) {
        return true;
    }

    // Enemy pawns attacking `square` sit where the target's own pawns would
    // attack from it.
    let pawn = Piece::new(PieceKind::Pawn, attacker);
    let pawn_offsets = pawn_attack_offsets(target.color);
    let mut pawn_squares = offsets(square, &pawn_offsets);
    if pawn_squares.any(|s| board.piece_at(s) == Some(pawn)) {
        return true;
    }

    let king = Piece::new(PieceKind::King, attacker);
    let adjacent_king = offsets(square, &KING_OFFSETS).find(|&s| board.piece_at(s) == Some(king));
    adjacent_king.is_some_and(|from| king_can_occupy(board, from, square))
}

/// First piece along each direction is `slider` or a queen of its color.
fn attacked_along(board: &Board, square: Square, directions: &[(i8, i8)], slider: Piece) -> bool {
    directions.iter().any(|&step| {
        ray(square, step)
            .find_map(|s| board.piece_at(s))
            .is_some_and(|p| {
                p.color == slider.color && (p.kind == slider.kind || p.kind == PieceKind::Queen)
            })
    })
}

/// Returns true if the king on `from` would not be capturable after moving to
/// `to` (taking whatever stands there). False if `from` holds no king.
pub fn king_can_occupy(board: &mut Board, from: Square, to: Square) -> bool {
    if !board
        .piece_at(from)
        .is_some_and(|p| p.kind == PieceKind::King)
    {
        return false;
    }

    let mut probe = board.probe(from, to);
    !can_be_captured(&mut probe, to)
}

/// Returns true if playing `from -> to` does not leave the mover's king
/// capturable.
///
/// Only king safety is examined; combine with
/// [`is_valid_move`](crate::validate::is_valid_move). Moves onto a king are
/// never legal.
pub fn is_legal_move(board: &mut Board, from: Square, to: Square) -> bool {
    let Some(mover) = board.piece_at(from) else {
        return false;
    };
    if board.piece_at(to).is_some_and(|p| p.kind == PieceKind::King) && from != to {
        return false;
    }

    let mut probe = board.probe(from, to);
    let king = probe.king_square(mover.color);
    !can_be_captured(&mut probe, king)
}

/// Returns true if `color`'s king is currently attacked.
pub fn is_in_check(board: &mut Board, color: Color) -> bool {
    let king = board.king_square(color);
    can_be_captured(board, king)
}
