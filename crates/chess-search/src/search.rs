//! Alpha-beta minimax search.
//!
//! Scores are always from one fixed color's point of view (the searching engine's), so
//! nodes where that color moves maximize and the others minimize. Children are visited
//! through [`Board::simulate`], which undoes each move when the guard drops.

use chess_core::{Color, Move};
use chess_engine::Board;
use tracing::trace;

use crate::eval::{evaluate, terminal_score};
use crate::ordering::order_moves;
use crate::tt::{Bound, TranspositionTable, TtEntry};

/// Bounds the initial window; wider than any mate score.
pub const INFINITY: i32 = i32::MAX - 1;

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` only when the root has no legal moves or depth was zero.
    pub best_move: Option<Move>,
    pub depth: u8,
    pub nodes: u64,
}

/// Search state for one call.
pub struct Searcher<'a> {
    tt: &'a mut TranspositionTable,
    perspective: Color,
    mobility_divisor: i32,
    move_ordering: bool,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(tt: &'a mut TranspositionTable, perspective: Color) -> Self {
        Searcher {
            tt,
            perspective,
            mobility_divisor: 2,
            move_ordering: true,
            nodes: 0,
        }
    }

    pub fn mobility_divisor(mut self, divisor: i32) -> Self {
        self.mobility_divisor = divisor;
        self
    }

    pub fn move_ordering(mut self, enabled: bool) -> Self {
        self.move_ordering = enabled;
        self
    }

    /// Searches `board` to a fixed depth and returns the best move for the side to move.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (score, best_move) = self.alpha_beta(board, depth, 0, -INFINITY, INFINITY);

        let stats = self.tt.stats();
        trace!(
            entries = self.tt.len(),
            probes = stats.probes,
            hits = stats.hits,
            stores = stats.stores,
            "transposition table"
        );

        SearchResult {
            score,
            best_move,
            depth,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        let hash = board.hash();

        // The root always searches so it can report a move.
        if ply > 0 {
            if let Some(entry) = self.tt.probe(hash, depth, alpha, beta) {
                return (entry.score, entry.best_move);
            }
        }

        if depth == 0 {
            return (evaluate(board, self.perspective, self.mobility_divisor), None);
        }

        let mut moves = board.legal_side_moves();
        if moves.is_empty() {
            return (terminal_score(board, self.perspective, depth), None);
        }

        let maximizing = board.side_to_move() == self.perspective;
        if self.move_ordering {
            order_moves(board, &mut moves, maximizing);
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in moves {
            let score = match board.simulate(mv, None) {
                Some(mut child) => self.alpha_beta(&mut child, depth - 1, ply + 1, alpha, beta).0,
                None => continue,
            };

            if maximizing {
                if score > best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_score);
                if best_score >= beta {
                    break;
                }
            } else {
                if score < best_score || best_move.is_none() {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best_score);
                if best_score <= alpha {
                    break;
                }
            }
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(
            hash,
            TtEntry {
                score: best_score,
                depth,
                best_move,
                bound,
            },
        );

        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{KING_VALUE, QUEEN_VALUE};

    fn mv(uci: &str) -> Move {
        Move::from_uci(uci).unwrap()
    }

    fn search(fen: &str, depth: u8, ordering: bool) -> SearchResult {
        let mut board = Board::from_fen(fen).unwrap();
        let mut tt = TranspositionTable::default();
        let perspective = board.side_to_move();
        let result = Searcher::new(&mut tt, perspective)
            .move_ordering(ordering)
            .search(&mut board, depth);
        assert!(board.history().is_empty(), "search must leave the board as found");
        result
    }

    #[test]
    fn finds_back_rank_mate() {
        let result = search("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", 2, true);
        assert_eq!(result.best_move, Some(mv("a1a8")));
        assert_eq!(result.score, KING_VALUE + 1);
    }

    #[test]
    fn takes_hanging_queen() {
        let result = search("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1", 2, true);
        assert_eq!(result.best_move, Some(mv("d1d5")));
        assert!(result.score > QUEEN_VALUE / 2);
    }

    #[test]
    fn black_perspective_maximizes_for_black() {
        let result = search("3rk3/8/8/3Q4/8/8/8/4K3 b - - 0 1", 2, true);
        assert_eq!(result.best_move, Some(mv("d8d5")));
        assert!(result.score > 0);
    }

    #[test]
    fn mated_root_has_no_move() {
        let result = search("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", 3, true);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -(KING_VALUE + 3));
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let result = search(chess_core::Fen::STARTPOS, 0, true);
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn ordering_changes_nodes_not_result() {
        let fen = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
        let ordered = search(fen, 3, true);
        let plain = search(fen, 3, false);
        assert_eq!(ordered.score, plain.score);
        assert_eq!(ordered.best_move, plain.best_move);
        assert!(ordered.nodes <= plain.nodes);
    }

    #[test]
    fn table_is_reused_between_searches() {
        let mut board = Board::new();
        let mut tt = TranspositionTable::default();
        let first = Searcher::new(&mut tt, Color::White).search(&mut board, 2);
        assert!(!tt.is_empty());
        let second = Searcher::new(&mut tt, Color::White).search(&mut board, 2);
        assert_eq!(first.score, second.score);
        assert!(second.nodes < first.nodes);
    }
}
