//! Errors raised while setting up a board.
//!
//! Playing moves never errors: illegal moves are rejected with `false`.

use chess_core::{Color, FenError};
use thiserror::Error;

/// Errors from constructing a [`Board`](crate::Board).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Fen(#[from] FenError),

    #[error("position has no {0} king")]
    MissingKing(Color),

    #[error("position has more than one {0} king")]
    DuplicateKing(Color),
}
