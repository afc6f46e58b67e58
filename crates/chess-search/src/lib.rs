//! Search and engine players for the chess engine.
//!
//! - [`evaluate`] - material plus scaled mobility from one color's point of view
//! - [`order_moves`] - check, MVV-LVA and centre heuristics
//! - [`TranspositionTable`] - hash-keyed cache of searched results with bound flags
//! - [`Searcher`] - fixed-depth alpha-beta minimax
//! - [`Engine`] - a player for one color at a [`Difficulty`] tier, tuned by [`SearchConfig`]
//!
//! # Example
//!
//! ```
//! use chess_core::Color;
//! use chess_engine::Board;
//! use chess_search::{Difficulty, Engine};
//!
//! let mut board = Board::new();
//! let mut white = Engine::new(Color::White, Difficulty::Medium);
//! let (score, mv) = white.select_and_make_move(&mut board).unwrap();
//! println!("white played {mv} ({score})");
//! ```

pub mod config;
pub mod engine;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod tt;

pub use config::{ConfigError, SearchConfig};
pub use engine::{Difficulty, Engine, ParseDifficultyError};
pub use eval::evaluate;
pub use ordering::order_moves;
pub use search::{SearchResult, Searcher};
pub use tt::{Bound, TranspositionTable, TtEntry, TtStats};
