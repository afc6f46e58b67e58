//! Square attack detection.

use chess_core::{Color, Piece, PieceKind, Square};

use crate::geometry::{
    pawn_capture_directions, Direction, ALL_DIRECTIONS, BISHOP_DIRECTIONS, KNIGHT_DIRECTIONS,
    ROOK_DIRECTIONS,
};
use crate::Board;

/// Returns true if any piece of color `by` attacks `square`.
///
/// Looks outward from the target: knight jumps, the first piece on each diagonal and
/// orthogonal ray, pawn capture squares, and adjacent squares for the enemy king.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let holds = |target: Option<Square>, kind: PieceKind| {
        target.is_some_and(|s| board.piece_at(s) == Some(Piece::new(by, kind)))
    };

    if KNIGHT_DIRECTIONS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceKind::Knight))
    {
        return true;
    }

    if ALL_DIRECTIONS
        .iter()
        .any(|&(dr, dc)| holds(square.offset(dr, dc), PieceKind::King))
    {
        return true;
    }

    // A pawn of `by` attacks us from one row behind its direction of travel.
    if pawn_capture_directions(by.pawn_direction())
        .iter()
        .any(|&(dr, dc)| holds(square.offset(-dr, dc), PieceKind::Pawn))
    {
        return true;
    }

    let ray_hits = |directions: &[Direction], slider: PieceKind| {
        directions.iter().any(|&dir| {
            first_piece_along(board, square, dir).is_some_and(|piece| {
                piece.color == by && (piece.kind == slider || piece.kind == PieceKind::Queen)
            })
        })
    };

    ray_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || ray_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}

fn first_piece_along(board: &Board, from: Square, (dr, dc): Direction) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = current.offset(dr, dc) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        current = next;
    }
    None
}
