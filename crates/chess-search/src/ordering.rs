//! Move ordering heuristics.
//!
//! Good moves first means earlier alpha-beta cutoffs. In plain alpha-beta the ordering
//! changes only how many nodes are visited, never the value returned.
//!
//! The transposition table narrows that guarantee. A stored entry may answer any node of
//! equal or shallower depth, and which entries exist depends on visit order. Up to three
//! plies a position cannot recur at a shallower node of the same search, so ordered and
//! unordered searches return the same score. From four plies on, a transposition can reuse
//! a deeper score and the two may differ in rare positions.

use std::cmp::Reverse;

use chess_core::{Move, Square};
use chess_engine::Board;

use crate::eval::{piece_value, PAWN_VALUE};

/// Bonus for a move that attacks the enemy king.
pub const CHECK_BONUS: i32 = 100;
/// Bonus for landing on one of the four centre squares.
pub const CENTRE_BONUS: i32 = 5;

const CENTRE: [Square; 4] = [
    Square::new(3, 3), // d5
    Square::new(3, 4), // e5
    Square::new(4, 3), // d4
    Square::new(4, 4), // e4
];

/// Heuristic score of `mv` from the mover's point of view.
///
/// Sums a check bonus, an MVV-LVA term `10 * victim - attacker` in pawn units for
/// captures, and a centre bonus.
pub fn score_move(board: &mut Board, mv: Move) -> i32 {
    let Some(attacker) = board.piece_at(mv.from()) else {
        return 0;
    };
    let mut score = 0;

    if let Some(victim) = board.piece_at(mv.to()) {
        score += 10 * (piece_value(victim.kind) / PAWN_VALUE)
            - piece_value(attacker.kind) / PAWN_VALUE;
    }
    if CENTRE.contains(&mv.to()) {
        score += CENTRE_BONUS;
    }
    if let Some(after) = board.simulate(mv, None) {
        if after.is_king_attacked(attacker.color.opposite()) {
            score += CHECK_BONUS;
        }
    }
    score
}

/// Sorts `moves` so the most promising come first for the side to move.
///
/// Scores are expressed from the searching side's view: a maximizing node sorts
/// descending, a minimizing node (the opponent moving) ascending. The sort is stable, so
/// equally scored moves keep generation order.
pub fn order_moves(board: &mut Board, moves: &mut [Move], maximizing: bool) {
    let mut keyed: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| {
            let score = score_move(board, mv);
            (if maximizing { score } else { -score }, mv)
        })
        .collect();

    if maximizing {
        keyed.sort_by_key(|&(score, _)| Reverse(score));
    } else {
        keyed.sort_by_key(|&(score, _)| score);
    }

    for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
        *slot = mv;
    }
}
