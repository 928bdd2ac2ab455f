//! Tic-tac-toe against a depth-limited minimax engine.

mod action;
mod contracts;
mod minimax;
mod position;
pub mod rules;
mod session;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use contracts::{BoardConsistent, Contract, MoveContract, PlayersTurn, SquareIsEmpty};
pub use minimax::{
    LOSS_SCORE, MAX_USEFUL_DEPTH, Minimax, NEUTRAL_SCORE, ScoredMove, SearchError, WIN_SCORE,
    select_move,
};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, winning_lines};
pub use session::{Phase, Session, SessionError, self_play};
pub use types::{Board, BoardError, Player, SQUARE_COUNT, Square};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};

/// A player's mark on the board.
pub type Mark = Player;
