//! Core types for chess.
//!
//! This crate provides the fundamental types shared by the rules engine and the search:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for (row, column) board coordinates
//! - [`Move`] for (origin, destination) pairs
//! - FEN parsing via [`Fen`]
//!
//! Coordinates follow the board array: row 0 is Black's back rank, row 7 is White's,
//! column 0 is the a-file.

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
