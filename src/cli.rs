//! Command-line interface for tictactoe_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_minimax::{Board, Player};

/// Tic-tac-toe against a depth-limited minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the engine config file (TOML)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Search depth override
        #[arg(short, long)]
        depth: Option<u32>,

        /// Mark played by the engine (X or O)
        #[arg(short, long)]
        mark: Option<Player>,

        /// Pacing delay override, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Classify a board as won, tied or undecided
    Evaluate {
        /// Nine cells, e.g. "XX.O....." ('.', '-' or '_' for empty)
        #[arg(short, long)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Nine cells, e.g. "XX.O....." ('.', '-' or '_' for empty)
        #[arg(short, long)]
        board: Board,

        /// Mark the engine plays for (defaults to the config's mark)
        #[arg(short, long)]
        mark: Option<Player>,

        /// Search depth override
        #[arg(short, long)]
        depth: Option<u32>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let two engines play each other from an empty board
    SelfPlay {
        /// Search depth for both engines
        #[arg(short, long, default_value = "9")]
        depth: u32,
    },
}
