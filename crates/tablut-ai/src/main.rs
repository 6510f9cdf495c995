//! Tablut self-play.
//!
//! Plays the engine against itself from the opening position, optionally
//! after a fixed opening sequence, and prints the game as it goes.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tablut_ai::{
    self_play, Ai, Evaluator, GameResult, MaterialEvaluator, NeutralEvaluator, SearchConfig,
};
use tablut_core::Move;
use tablut_engine::Board;

/// Static evaluation used for undecided positions.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum EvaluatorKind {
    Neutral,
    Material,
}

/// Tablut self-play - the engine plays both sides.
#[derive(Parser)]
#[command(name = "tablut-ai")]
#[command(about = "Plays Tablut engine against engine")]
struct Args {
    /// TOML search configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of moves per side
    #[arg(long)]
    move_limit: Option<usize>,

    /// Moves to play before the engine takes over, e.g. d1-c e4-c
    #[arg(long, num_args = 1..)]
    opening: Vec<Move>,

    /// Static evaluator for undecided positions
    #[arg(long, value_enum, default_value = "neutral")]
    evaluator: EvaluatorKind,

    /// Only print the result
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    tracing::info!(?config, "starting self-play");

    let mut board = Board::new();
    if let Some(limit) = args.move_limit {
        board.set_move_limit(limit)?;
    }
    for &mv in &args.opening {
        board
            .make_move(mv)
            .with_context(|| format!("opening move {}", mv))?;
    }

    let result = match args.evaluator {
        EvaluatorKind::Neutral => play(
            Ai::with_evaluator(config, NeutralEvaluator),
            &mut board,
            args.quiet,
        )?,
        EvaluatorKind::Material => play(
            Ai::with_evaluator(config, MaterialEvaluator),
            &mut board,
            args.quiet,
        )?,
    };

    match result {
        GameResult::Won(winner) => {
            println!("{:?} wins after {} moves.", winner, board.move_count())
        }
        GameResult::MoveLimit => println!("Move limit reached after {} moves.", board.move_count()),
    }
    Ok(())
}

fn play<E: Evaluator>(ai: Ai<E>, board: &mut Board, quiet: bool) -> anyhow::Result<GameResult> {
    if !quiet {
        println!("{}", board);
    }
    let result = self_play(&ai, board, |board, outcome| {
        if !quiet {
            println!("{}. {}", board.move_count(), outcome.best_move);
            println!("{}", board);
        }
    })?;
    Ok(result)
}
