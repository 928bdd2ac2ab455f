//! tictactoe_minimax - command-line front end.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use std::path::Path;
use terminal::Terminal;
use tictactoe_minimax::{Board, EngineConfig, Minimax, Player, evaluate, self_play};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            depth,
            mark,
            delay_ms,
        } => run_play(&cli.config, depth, mark, delay_ms),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::BestMove {
            board,
            mark,
            depth,
            json,
        } => run_best_move(&cli.config, &board, mark, depth, json),
        Command::SelfPlay { depth } => run_self_play(depth),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument]
fn load_config(
    path: &Path,
    depth: Option<u32>,
    mark: Option<Player>,
    delay_ms: Option<u64>,
) -> Result<EngineConfig> {
    let mut config = EngineConfig::load_or_default(path)?;
    if let Some(depth) = depth {
        config = config.with_search_depth(depth)?;
    }
    if let Some(mark) = mark {
        config = config.with_automated_mark(mark);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_delay_ms(delay_ms);
    }
    Ok(config)
}

/// Run the interactive game
#[instrument]
fn run_play(
    config_path: &Path,
    depth: Option<u32>,
    mark: Option<Player>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let config = load_config(config_path, depth, mark, delay_ms)?;
    info!(?config, "Starting interactive game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Terminal::new(stdin.lock(), stdout.lock(), config).run()
}

/// Print the outcome of a board
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: &Board, json: bool) -> Result<()> {
    let outcome = evaluate(board);
    if json {
        let value = json!({ "board": board.to_string(), "outcome": outcome });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}\n\n{}", board.display(), outcome);
    }
    Ok(())
}

/// Print the engine's chosen move and every candidate score
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(
    config_path: &Path,
    board: &Board,
    mark: Option<Player>,
    depth: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = load_config(config_path, depth, mark, None)?;
    let engine = config.engine();
    let position = engine.select_move(board)?;
    let candidates = engine.scored_moves(board);

    if json {
        let value = json!({
            "board": board.to_string(),
            "mark": engine.maximizing(),
            "depth": engine.max_depth(),
            "index": position.to_index(),
            "position": position,
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}\n", board.display());
        for candidate in &candidates {
            println!(
                "  {} ({:>13}): {:>2}",
                candidate.position.to_index(),
                candidate.position.label(),
                candidate.score
            );
        }
        println!(
            "\n{} plays {} ({})",
            engine.maximizing(),
            position.to_index(),
            position
        );
    }
    Ok(())
}

/// Let two engines play each other
#[instrument]
fn run_self_play(depth: u32) -> Result<()> {
    let x = Minimax::new(Player::X, depth);
    let o = Minimax::new(Player::O, depth);
    let finished = self_play(&x, &o)?;

    for action in finished.history() {
        println!("{}", action);
    }
    println!("\n{}\n\n{}", finished.board().display(), finished.outcome());
    Ok(())
}
