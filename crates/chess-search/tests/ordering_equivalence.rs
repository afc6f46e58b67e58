//! Move ordering must only change how many nodes a search visits.

use chess_core::Fen;
use chess_engine::Board;
use chess_search::{Searcher, TranspositionTable};

fn run(fen: &str, depth: u8, ordering: bool) -> (i32, Option<chess_core::Move>, u64) {
    let mut board = Board::from_fen(fen).unwrap();
    let mut tt = TranspositionTable::default();
    let perspective = board.side_to_move();
    let result = Searcher::new(&mut tt, perspective)
        .move_ordering(ordering)
        .search(&mut board, depth);
    assert_eq!(board.to_fen(), Board::from_fen(fen).unwrap().to_fen());
    (result.score, result.best_move, result.nodes)
}

#[test]
fn start_position_score_matches() {
    let (ordered, _, _) = run(Fen::STARTPOS, 2, true);
    let (plain, _, _) = run(Fen::STARTPOS, 2, false);
    assert_eq!(ordered, plain);
}

#[test]
fn unique_best_move_matches() {
    // The rook takes the undefended queen; every other move loses material.
    let fen = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";
    let ordered = run(fen, 3, true);
    let plain = run(fen, 3, false);
    assert_eq!(ordered.0, plain.0);
    assert_eq!(ordered.1, plain.1);
    assert_eq!(ordered.1.map(|m| m.to_uci()), Some("d1d5".to_string()));
}

#[test]
fn middlegame_score_matches() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let ordered = run(fen, 3, true);
    let plain = run(fen, 3, false);
    assert_eq!(ordered.0, plain.0);
}
