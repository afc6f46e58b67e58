//! Perft (performance test) for move generator validation.
//!
//! Perft counts the leaf nodes of the legal move tree to a fixed depth. The counts can be
//! compared against published values to validate move generation, castling, en passant and
//! make/undo together.

use crate::Board;

/// Counts leaf nodes at the given depth.
///
/// Promotions count once per move since the promotion piece is not part of a [`Move`].
///
/// [`Move`]: chess_core::Move
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_side_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        if let Some(mut child) = board.simulate(mv, None) {
            nodes += perft(&mut child, depth - 1);
        }
    }
    nodes
}

/// Perft with divide: the node count below each root move, sorted by UCI string.
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(String, u64)> {
    let moves = board.legal_side_moves();
    let mut results = Vec::with_capacity(moves.len());

    for mv in moves {
        let nodes = match board.simulate(mv, None) {
            Some(mut child) if depth > 1 => perft(&mut child, depth - 1),
            Some(_) => 1,
            None => continue,
        };
        results.push((mv.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&mut Board::new(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&mut Board::new(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&mut Board::new(), 3), 8902);
    }

    #[test]
    #[ignore] // slow in debug builds
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&mut Board::new(), 4), 197281);
    }

    #[test]
    fn perft_kiwipete() {
        let mut board = Board::from_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&mut board, 1), 48);
        assert_eq!(perft(&mut board, 2), 2039);
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let mut board = Board::from_fen(KIWIPETE).unwrap();
        let fen = board.to_fen();
        let hash = board.hash();
        perft(&mut board, 2);
        assert_eq!(board.to_fen(), fen);
        assert_eq!(board.hash(), hash);
        assert!(board.history().is_empty());
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new();
        let divide = perft_divide(&mut board, 2);
        assert_eq!(divide.len(), 20);
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert!(divide.iter().all(|(_, n)| *n == 20));
    }
}
