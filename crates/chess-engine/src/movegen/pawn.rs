//! Pawn pushes, captures and en passant.

use chess_core::{Color, Piece, PieceKind, Square};

use crate::geometry::pawn_capture_directions;
use crate::Board;

pub(super) fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    let en_passant = en_passant_target(board, from, color);
    for (dr, dc) in pawn_capture_directions(dir) {
        let Some(target) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color != color => out.push(target),
            Some(_) => {}
            None if en_passant == Some(target) => out.push(target),
            None => {}
        }
    }
}

/// The en passant destination available to the pawn on `from`, if any.
///
/// Requires the previous move to be an enemy pawn's two-row advance that landed beside
/// this pawn. The destination is the square the enemy pawn skipped.
pub(crate) fn en_passant_target(board: &Board, from: Square, color: Color) -> Option<Square> {
    let last = board.last_move()?;
    if last.moved != Piece::new(color.opposite(), PieceKind::Pawn) || !last.is_double_pawn_push()
    {
        return None;
    }
    if last.to.row() != from.row() || last.to.col().abs_diff(from.col()) != 1 {
        return None;
    }
    let target = last.to.offset(color.pawn_direction(), 0)?;
    board.piece_at(target).is_none().then_some(target)
}
