//! Tic-tac-toe against a depth-limited minimax opponent.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies a board as won, tied or undecided
//! - **Search**: [`Minimax`] scores every empty square with an unpruned,
//!   depth-limited minimax and picks the best (lowest index on ties)
//! - **Game**: typestate phases ([`GameSetup`], [`GameInProgress`],
//!   [`GameFinished`]) with contract-checked moves
//! - **Session**: [`Session`] runs the human-versus-engine turn cycle
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Board, Minimax, Player, Position};
//!
//! let board: Board = "XX.O.....".parse()?;
//! let engine = Minimax::new(Player::O, 2);
//! assert_eq!(engine.select_move(&board)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardConsistent, BoardError, Contract, GameFinished, GameInProgress, GameResult,
    GameSetup, LINES, LOSS_SCORE, Line, MAX_USEFUL_DEPTH, Mark, Minimax, Move, MoveContract,
    MoveError, NEUTRAL_SCORE, Outcome, Phase, Player, PlayersTurn, Position, SQUARE_COUNT,
    ScoredMove, SearchError, Session, SessionError, Square, SquareIsEmpty, WIN_SCORE,
    check_winner, evaluate, rules, select_move, self_play, winning_lines,
};
