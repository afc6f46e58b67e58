//! King steps and castling.

use chess_core::{Color, Piece, PieceKind, Square};

use super::attacks::is_square_attacked;
use super::stepping_moves;
use crate::castling::CastleSide;
use crate::geometry::ALL_DIRECTIONS;
use crate::Board;

pub(super) fn king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    stepping_moves(board, from, color, &ALL_DIRECTIONS, out);
    castling_moves(board, from, color, out);
}

fn castling_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let rights = board.castling_rights();
    if rights.king_moved(color) || from != CastleSide::king_home(color) {
        return;
    }

    let enemy = color.opposite();
    let row = color.back_row();
    let mut in_check = None;

    for side in CastleSide::ALL {
        if !rights.can_castle(color, side) {
            continue;
        }
        if board.piece_at(side.rook_home(color)) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }
        if side
            .between_cols()
            .iter()
            .any(|&col| board.piece_at(Square::new(row, col)).is_some())
        {
            continue;
        }
        if *in_check.get_or_insert_with(|| is_square_attacked(board, from, enemy)) {
            return;
        }
        if side
            .king_path_cols()
            .iter()
            .any(|&col| is_square_attacked(board, Square::new(row, col), enemy))
        {
            continue;
        }
        out.push(side.king_target(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castles(fen: &str, from: Square) -> Vec<Square> {
        let board = Board::from_fen(fen).unwrap();
        let color = board.piece_at(from).unwrap().color;
        let mut out = Vec::new();
        castling_moves(&board, from, color, &mut out);
        out
    }

    #[test]
    fn both_sides_when_clear() {
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Square::E1);
        assert_eq!(out, vec![Square::C1, Square::G1]);
        let out = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Square::E8);
        assert_eq!(out, vec![Square::C8, Square::G8]);
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on f8 covers f1.
        let out = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1);
        assert_eq!(out, vec![Square::C1]);
    }

    #[test]
    fn no_castling_out_of_check() {
        let out = castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1);
        assert!(out.is_empty());
    }

    #[test]
    fn queenside_b_file_may_be_attacked_but_not_occupied() {
        // b1 attacked by the rook on b8: castling is still allowed.
        let out = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", Square::E1);
        assert_eq!(out, vec![Square::C1]);
        let out = castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", Square::E1);
        assert!(out.is_empty());
    }

    #[test]
    fn rights_and_rook_presence_required() {
        let out = castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1", Square::E1);
        assert!(out.is_empty());
        let out = castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1", Square::E1);
        assert_eq!(out, vec![Square::G1]);
    }
}
