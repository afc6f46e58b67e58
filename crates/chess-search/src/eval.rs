//! Static evaluation: material plus a mobility term.

use chess_core::{Color, PieceKind};
use chess_engine::Board;

/// Piece values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
/// Large enough that losing the king outweighs any material or mobility swing.
pub const KING_VALUE: i32 = 1_000_000;

/// Material value of a piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Material balance from `perspective`'s point of view.
pub fn material(board: &Board, perspective: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.kind);
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Own pseudo-legal move count minus the opponent's.
pub fn mobility(board: &mut Board, perspective: Color) -> i32 {
    let own = board.side_moves(perspective).len() as i32;
    let theirs = board.side_moves(perspective.opposite()).len() as i32;
    own - theirs
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Mobility is divided by `mobility_divisor` to keep it below the value of a pawn in
/// ordinary positions.
pub fn evaluate(board: &mut Board, perspective: Color, mobility_divisor: i32) -> i32 {
    debug_assert!(mobility_divisor > 0);
    material(board, perspective) + mobility(board, perspective) / mobility_divisor
}

/// Score of a position where the side to move has no legal moves.
///
/// Checkmate is worth the king's value plus the remaining depth, so quicker mates score
/// higher for the winner. Stalemate is a draw.
pub fn terminal_score(board: &Board, perspective: Color, remaining_depth: u8) -> i32 {
    if !board.in_check() {
        return 0;
    }
    let mate = KING_VALUE + remaining_depth as i32;
    if board.side_to_move() == perspective {
        -mate
    } else {
        mate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let mut board = Board::new();
        assert_eq!(material(&board, Color::White), 0);
        assert_eq!(mobility(&mut board, Color::White), 0);
        assert_eq!(evaluate(&mut board, Color::Black, 2), 0);
    }

    #[test]
    fn extra_queen_dominates() {
        let mut board = Board::from_fen("3qk3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(material(&board, Color::Black), QUEEN_VALUE);
        assert_eq!(material(&board, Color::White), -QUEEN_VALUE);
        assert!(evaluate(&mut board, Color::Black, 2) > QUEEN_VALUE - 50);
    }

    #[test]
    fn mobility_is_scaled_down() {
        // White rook on an open board against a bare king.
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let raw = mobility(&mut board, Color::White);
        assert!(raw > 0);
        assert_eq!(
            evaluate(&mut board, Color::White, 2),
            ROOK_VALUE + raw / 2
        );
        assert_eq!(
            evaluate(&mut board, Color::White, 1),
            ROOK_VALUE + raw
        );
    }

    #[test]
    fn terminal_scores() {
        let mate = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        assert_eq!(terminal_score(&mate, Color::White, 3), KING_VALUE + 3);
        assert_eq!(terminal_score(&mate, Color::Black, 3), -(KING_VALUE + 3));

        let stalemate = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(terminal_score(&stalemate, Color::White, 3), 0);
    }
}
