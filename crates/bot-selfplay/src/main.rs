//! Self-play driver - pits two engine players against each other.
//!
//! Each ply is logged through `tracing`; the final position and result are printed to
//! stdout. Set `RUST_LOG=debug` to see per-search statistics.

use std::path::PathBuf;

use anyhow::Context;
use chess_core::{Color, Fen};
use chess_engine::{Board, GameState};
use chess_search::{Difficulty, Engine, SearchConfig};
use clap::Parser;

/// Plays engine players against each other.
#[derive(Parser)]
#[command(name = "bot-selfplay")]
#[command(about = "Plays two engine players against each other")]
struct Args {
    /// Difficulty of the white player (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    white: Difficulty,

    /// Difficulty of the black player (easy, medium, hard)
    #[arg(long, default_value = "easy")]
    black: Difficulty,

    /// Stop a game after this many plies
    #[arg(long, default_value = "200")]
    max_plies: u32,

    /// Number of games to play
    #[arg(long, default_value = "1")]
    games: u32,

    /// Starting position as FEN
    #[arg(long, default_value = Fen::STARTPOS)]
    fen: String,

    /// Search configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random tier, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Finished(GameState),
    PlyLimit,
    /// An engine could not produce a move in a position that was still in progress.
    Stuck(Color),
}

fn build_engine(color: Color, difficulty: Difficulty, config: &SearchConfig, seed: Option<u64>) -> Engine {
    let engine = Engine::with_config(color, difficulty, config.clone());
    match seed {
        // Distinct streams per color so both sides do not mirror each other.
        Some(seed) => engine.with_seed(seed.wrapping_add(color.index() as u64)),
        None => engine,
    }
}

fn play_game(board: &mut Board, engines: &mut [Engine; 2], max_plies: u32) -> Outcome {
    for ply in 0..max_plies {
        let state = board.terminal_state();
        if state.is_over() {
            return Outcome::Finished(state);
        }

        let side = board.side_to_move();
        let engine = &mut engines[side.index()];
        let Some((score, mv)) = engine.select_and_make_move(board) else {
            return Outcome::Stuck(side);
        };
        tracing::info!(ply = ply + 1, %side, %mv, score, "move played");
    }

    match board.terminal_state() {
        GameState::InProgress => Outcome::PlyLimit,
        state => Outcome::Finished(state),
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Finished(GameState::Checkmate { loser }) => {
            format!("{} wins by checkmate", loser.opposite())
        }
        Outcome::Finished(GameState::Stalemate) => "draw by stalemate".to_string(),
        Outcome::Finished(GameState::InProgress) => "unfinished".to_string(),
        Outcome::PlyLimit => "stopped at the ply limit".to_string(),
        Outcome::Stuck(color) => format!("{color} engine produced no move"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading search config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    // Fail before any engine is built if the position is unusable.
    Board::from_fen(&args.fen).context("parsing --fen")?;

    tracing::info!(white = %args.white, black = %args.black, games = args.games, "Starting self-play");

    let mut engines = [
        build_engine(Color::White, args.white, &config, args.seed),
        build_engine(Color::Black, args.black, &config, args.seed),
    ];

    for game in 1..=args.games {
        let mut board = Board::from_fen(&args.fen)?;
        for engine in &mut engines {
            engine.new_game();
        }

        let outcome = play_game(&mut board, &mut engines, args.max_plies);
        tracing::info!(game, plies = board.history().len(), ?outcome, "Game over");

        println!("Game {game}: {}", describe(outcome));
        println!("{board}");
        println!("{}", board.to_fen());
    }

    Ok(())
}
