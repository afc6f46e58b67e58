//! Engine players with difficulty tiers.

use std::fmt;
use std::str::FromStr;

use chess_core::{Color, Move};
use chess_engine::Board;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::search::{SearchResult, Searcher};
use crate::tt::TranspositionTable;

/// How strongly an engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Uniformly random legal move, no search.
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fixed search depth for this tier, or `None` for random play.
    pub fn search_depth(self, config: &SearchConfig) -> Option<u8> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(config.medium_depth),
            Difficulty::Hard => Some(config.hard_depth),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "m" | "medium" => Ok(Difficulty::Medium),
            "h" | "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// A computer player for one color.
///
/// The transposition table lives as long as the engine, so later moves of the same game
/// reuse earlier results. Call [`Engine::new_game`] between games.
#[derive(Debug)]
pub struct Engine {
    color: Color,
    difficulty: Difficulty,
    config: SearchConfig,
    tt: TranspositionTable,
    rng: StdRng,
}

impl Engine {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self::with_config(color, difficulty, SearchConfig::default())
    }

    pub fn with_config(color: Color, difficulty: Difficulty, config: SearchConfig) -> Self {
        Engine {
            color,
            difficulty,
            tt: TranspositionTable::new(config.tt_capacity),
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the random tier so games can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forgets everything learned in the previous game.
    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    /// Runs a fixed-depth search from this engine's point of view.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        Searcher::new(&mut self.tt, self.color)
            .mobility_divisor(self.config.mobility_divisor)
            .move_ordering(self.config.move_ordering)
            .search(board, depth)
    }

    /// Picks a move without playing it. Returns the score the choice is based on.
    pub fn select_move(&mut self, board: &mut Board) -> Option<(i32, Move)> {
        if board.side_to_move() != self.color {
            warn!(engine = %self.color, to_move = %board.side_to_move(), "engine asked to move out of turn");
            return None;
        }

        match self.difficulty.search_depth(&self.config) {
            None => {
                let moves = board.legal_side_moves();
                let mv = *moves.choose(&mut self.rng)?;
                let mut after = board.simulate(mv, None)?;
                let score = evaluate(&mut after, self.color, self.config.mobility_divisor);
                Some((score, mv))
            }
            Some(depth) => {
                let result = self.search(board, depth);
                debug!(
                    engine = %self.color,
                    difficulty = %self.difficulty,
                    depth = result.depth,
                    nodes = result.nodes,
                    score = result.score,
                    best = ?result.best_move,
                    "search finished"
                );
                result.best_move.map(|mv| (result.score, mv))
            }
        }
    }

    /// Picks a move and plays it on `board`.
    ///
    /// Returns `None` without touching the board if it is not this engine's turn or the
    /// side to move has no legal move. Promotions always become queens.
    pub fn select_and_make_move(&mut self, board: &mut Board) -> Option<(i32, Move)> {
        let (score, mv) = self.select_move(board)?;
        if !board.make_move(mv, false, None) {
            warn!(%mv, "selected move was rejected by the board");
            return None;
        }
        debug!(engine = %self.color, %mv, score, "engine moved");
        Some((score, mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_engine::GameState;

    #[test]
    fn parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("M".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(ParseDifficultyError("expert".to_string()))
        );
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn tier_depths_follow_config() {
        let config = SearchConfig {
            medium_depth: 3,
            ..SearchConfig::default()
        };
        assert_eq!(Difficulty::Easy.search_depth(&config), None);
        assert_eq!(Difficulty::Medium.search_depth(&config), Some(3));
        assert_eq!(Difficulty::Hard.search_depth(&config), Some(4));
    }

    #[test]
    fn easy_plays_a_legal_move() {
        let mut board = Board::new();
        let mut engine = Engine::new(Color::White, Difficulty::Easy).with_seed(7);
        let (_, mv) = engine.select_and_make_move(&mut board).unwrap();
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.last_move().unwrap().as_move(), mv);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn seeded_easy_engines_agree() {
        let pick = |seed| {
            let mut board = Board::new();
            let mut engine = Engine::new(Color::White, Difficulty::Easy).with_seed(seed);
            engine.select_and_make_move(&mut board).map(|(_, mv)| mv)
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn refuses_to_move_out_of_turn() {
        let mut board = Board::new();
        let mut engine = Engine::new(Color::Black, Difficulty::Medium);
        assert_eq!(engine.select_and_make_move(&mut board), None);
        assert!(board.history().is_empty());
    }

    #[test]
    fn medium_delivers_mate_in_one() {
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let mut engine = Engine::new(Color::White, Difficulty::Medium);
        let (_, mv) = engine.select_and_make_move(&mut board).unwrap();
        assert_eq!(mv, Move::from_uci("a1a8").unwrap());
        assert_eq!(
            board.terminal_state(),
            GameState::Checkmate {
                loser: Color::Black
            }
        );
    }

    #[test]
    fn no_move_when_mated() {
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let mut engine = Engine::new(Color::Black, difficulty);
            assert_eq!(engine.select_and_make_move(&mut board), None);
        }
    }

    #[test]
    fn new_game_clears_table() {
        let mut board = Board::new();
        let mut engine = Engine::new(Color::White, Difficulty::Medium);
        engine.select_and_make_move(&mut board).unwrap();
        assert!(!engine.transposition_table().is_empty());
        engine.new_game();
        assert!(engine.transposition_table().is_empty());
    }
}
