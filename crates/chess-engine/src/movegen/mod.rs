//! Pseudo-legal move generation.
//!
//! Generators produce destination squares for the piece on a given square. They ignore
//! whether the mover's own king is left in check; [`Board::can_make_move`] filters that.
//!
//! [`Board::can_make_move`]: crate::Board::can_make_move

pub mod attacks;
mod king;
mod pawn;
pub mod perft;

use chess_core::{Color, PieceKind, Square};

use crate::geometry::{
    Direction, ALL_DIRECTIONS, BISHOP_DIRECTIONS, KNIGHT_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::Board;

/// Returns the pseudo-legal destinations for the piece on `from`.
///
/// An empty square yields no destinations.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => pawn::pawn_moves(board, from, piece.color, &mut targets),
        PieceKind::Knight => {
            stepping_moves(board, from, piece.color, &KNIGHT_DIRECTIONS, &mut targets)
        }
        PieceKind::Bishop => {
            sliding_moves(board, from, piece.color, &BISHOP_DIRECTIONS, &mut targets)
        }
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRECTIONS, &mut targets),
        PieceKind::Queen => sliding_moves(board, from, piece.color, &ALL_DIRECTIONS, &mut targets),
        PieceKind::King => king::king_moves(board, from, piece.color, &mut targets),
    }
    targets
}

/// One step in each direction, onto empty or enemy squares.
fn stepping_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Direction],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let Some(target) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(target) {
            Some(occupant) if occupant.color == color => {}
            _ => out.push(target),
        }
    }
}

/// Rays in each direction, stopping before a friendly piece or on an enemy one.
fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Direction],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(target) = current.offset(dr, dc) {
            match board.piece_at(target) {
                None => out.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        out.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<String> {
        squares.sort();
        squares.into_iter().map(Square::to_algebraic).collect()
    }

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new();
        assert!(pseudo_legal_moves(&board, sq("e4")).is_empty());
    }

    #[test]
    fn knight_from_start() {
        let board = Board::new();
        assert_eq!(sorted(pseudo_legal_moves(&board, sq("g1"))), ["f3", "h3"]);
    }

    #[test]
    fn blocked_sliders_have_no_moves() {
        let board = Board::new();
        assert!(pseudo_legal_moves(&board, sq("a1")).is_empty());
        assert!(pseudo_legal_moves(&board, sq("c1")).is_empty());
        assert!(pseudo_legal_moves(&board, sq("d1")).is_empty());
    }

    #[test]
    fn rook_stops_on_capture() {
        let board = Board::from_fen("4k3/8/8/8/p7/8/8/R3K3 w - - 0 1").unwrap();
        let moves = sorted(pseudo_legal_moves(&board, sq("a1")));
        assert!(moves.contains(&"a4".to_string()));
        assert!(!moves.contains(&"a5".to_string()));
        assert!(moves.contains(&"d1".to_string()));
        assert!(!moves.contains(&"e1".to_string()));
    }

    #[test]
    fn centralised_queen_has_27_moves() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").unwrap();
        assert_eq!(pseudo_legal_moves(&board, sq("d4")).len(), 27);
    }
}
