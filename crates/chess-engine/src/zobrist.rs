//! Zobrist hashing for position identification.
//!
//! The key table holds one random 64-bit value per (piece kind, color, square) plus one
//! value for "black to move". A position's hash is the XOR of the keys of every occupied
//! square, XORed with the side key when Black is to move. Castling rights, en passant
//! and move clocks are deliberately not part of the key.
//!
//! The table is computed once at compile time from a fixed seed and shared read-only, so
//! every board in the process hashes against the same keys.

use chess_core::{Color, Piece, Square};

/// Zobrist hash keys.
pub struct ZobristKeys {
    /// Keys for pieces: [kind][color][square]
    pub pieces: [[[u64; 64]; 2]; 6],
    /// Key for black to move (XOR when black to move).
    pub black_to_move: u64,
}

impl ZobristKeys {
    /// Initializes Zobrist keys using a simple PRNG.
    ///
    /// Uses a fixed seed for reproducibility across runs.
    pub const fn new() -> Self {
        // xorshift64, usable in const context
        const fn next_random(state: u64) -> u64 {
            let mut x = state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            x
        }

        let mut state = 0x9E3779B97F4A7C15u64; // Golden ratio seed
        let mut pieces = [[[0u64; 64]; 2]; 6];

        let mut kind = 0;
        while kind < 6 {
            let mut color = 0;
            while color < 2 {
                let mut square = 0;
                while square < 64 {
                    state = next_random(state);
                    pieces[kind][color][square] = state;
                    square += 1;
                }
                color += 1;
            }
            kind += 1;
        }

        let black_to_move = next_random(state);

        ZobristKeys {
            pieces,
            black_to_move,
        }
    }

    /// Returns the key for a piece on a square.
    #[inline]
    pub const fn piece_key(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.kind.index()][piece.color.index()][square.index() as usize]
    }

    /// Returns the side-to-move contribution for the given color.
    #[inline]
    pub const fn side_key(&self, side_to_move: Color) -> u64 {
        match side_to_move {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }

    /// Computes a hash from scratch over a placement grid and side to move.
    pub fn hash_position(&self, squares: &[[Option<Piece>; 8]; 8], side_to_move: Color) -> u64 {
        let mut hash = self.side_key(side_to_move);
        for sq in Square::all() {
            if let Some(piece) = squares[sq.row() as usize][sq.col() as usize] {
                hash ^= self.piece_key(piece, sq);
            }
        }
        hash
    }
}

/// Global Zobrist keys (initialized at compile time).
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::PieceKind;

    #[test]
    fn zobrist_keys_are_nonzero() {
        assert_ne!(ZOBRIST.black_to_move, 0);
        assert_ne!(ZOBRIST.pieces[0][0][0], 0);
    }

    #[test]
    fn zobrist_keys_are_unique() {
        let wp = Piece::new(Color::White, PieceKind::Pawn);
        let bp = Piece::new(Color::Black, PieceKind::Pawn);
        let wn = Piece::new(Color::White, PieceKind::Knight);

        let key1 = ZOBRIST.piece_key(wp, Square::A1);
        let key2 = ZOBRIST.piece_key(wp, Square::B1);
        let key3 = ZOBRIST.piece_key(bp, Square::A1);
        let key4 = ZOBRIST.piece_key(wn, Square::A1);

        assert_ne!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key1, key4);
    }

    #[test]
    fn side_key_only_for_black() {
        let empty = [[None; 8]; 8];
        assert_eq!(ZOBRIST.hash_position(&empty, Color::White), 0);
        assert_eq!(
            ZOBRIST.hash_position(&empty, Color::Black),
            ZOBRIST.black_to_move
        );
    }

    #[test]
    fn incremental_update_matches_recompute() {
        let mut squares = [[None; 8]; 8];
        let rook = Piece::new(Color::White, PieceKind::Rook);
        squares[7][0] = Some(rook);
        let before = ZOBRIST.hash_position(&squares, Color::White);

        squares[7][0] = None;
        squares[4][0] = Some(rook);
        let after = ZOBRIST.hash_position(&squares, Color::Black);

        let incremental = before
            ^ ZOBRIST.piece_key(rook, Square::A1)
            ^ ZOBRIST.piece_key(rook, Square::new(4, 0))
            ^ ZOBRIST.black_to_move;
        assert_eq!(incremental, after);
    }
}
