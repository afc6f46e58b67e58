//! Chess rules engine built around a reversible mailbox board.
//!
//! This crate provides:
//! - [`Board`] - 8x8 board with make/undo, an incremental Zobrist hash and a move history
//! - [`Simulation`] - a guard that applies a hypothetical move and undoes it on drop
//! - Pseudo-legal move generation in [`movegen`], filtered to legal moves by the board
//! - [`GameState`] - checkmate and stalemate detection
//! - [`perft`](movegen::perft) for validating the generator
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Square};
//! use chess_engine::{Board, GameState};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_side_moves().len(), 20);
//!
//! let e4 = Move::new(Square::from_algebraic("e2").unwrap(), Square::from_algebraic("e4").unwrap());
//! assert!(board.make_move(e4, false, None));
//! assert_eq!(board.side_to_move(), Color::Black);
//!
//! // Look one move ahead without committing to it.
//! let reply = Move::from_uci("e7e5").unwrap();
//! if let Some(after) = board.simulate(reply, None) {
//!     assert_eq!(after.side_to_move(), Color::White);
//! }
//! assert_eq!(board.history().len(), 1);
//! assert_eq!(board.terminal_state(), GameState::InProgress);
//! ```

mod board;
mod cache;
pub mod castling;
mod error;
pub mod geometry;
pub mod movegen;
mod record;
mod rules;
mod simulation;
mod zobrist;

pub use board::Board;
pub use castling::{CastleSide, CastlingRights};
pub use error::BoardError;
pub use movegen::attacks::is_square_attacked;
pub use movegen::perft::{perft, perft_divide};
pub use record::MoveRecord;
pub use rules::GameState;
pub use simulation::Simulation;
pub use zobrist::{ZobristKeys, ZOBRIST};
