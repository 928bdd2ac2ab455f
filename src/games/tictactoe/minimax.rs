//! Depth-limited minimax move selection.
//!
//! The search is exhaustive within the depth bound: no pruning, no
//! transposition table, no static evaluation. A position that is not
//! decided when the bound is reached scores 0.

use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by the maximizing side.
pub const WIN_SCORE: i32 = 1;
/// Score of a position won by the minimizing side.
pub const LOSS_SCORE: i32 = -1;
/// Score of a tie, and of any undecided position at the depth cutoff.
pub const NEUTRAL_SCORE: i32 = 0;

/// Deepest search that can still matter on a 3x3 board.
pub const MAX_USEFUL_DEPTH: u32 = 9;

/// Failure to pick a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Every square is occupied.
    #[display("No legal move: the board is full")]
    NoLegalMove,

    /// Both sides were given the same mark.
    #[display("Maximizing and minimizing sides both use {}", _0)]
    IdenticalMarks(Player),
}

impl std::error::Error for SearchError {}

/// A candidate move with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the maximizing side would play.
    pub position: Position,
    /// Score of the resulting position.
    pub score: i32,
}

/// Minimax search parameters for one automated player.
///
/// Holds no board state; every call receives the board it works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Minimax {
    /// Mark the search maximizes for.
    maximizing: Player,
    /// Mark the search minimizes for.
    minimizing: Player,
    /// Plies searched below each candidate move.
    max_depth: u32,
}

impl Minimax {
    /// Creates a search for `maximizing` against its opponent.
    pub fn new(maximizing: Player, max_depth: u32) -> Self {
        Self {
            maximizing,
            minimizing: maximizing.opponent(),
            max_depth,
        }
    }

    /// Creates a search with both sides given explicitly.
    pub fn with_sides(
        maximizing: Player,
        minimizing: Player,
        max_depth: u32,
    ) -> Result<Self, SearchError> {
        if maximizing == minimizing {
            return Err(SearchError::IdenticalMarks(maximizing));
        }
        Ok(Self {
            maximizing,
            minimizing,
            max_depth,
        })
    }

    /// Picks the empty square with the highest score.
    ///
    /// Equal scores resolve to the lowest index. The board is only read.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoLegalMove`] on a full board.
    #[instrument(skip(self, board), fields(board = %board, mark = %self.maximizing, depth = self.max_depth))]
    pub fn select_move(&self, board: &Board) -> Result<Position, SearchError> {
        let mut best: Option<ScoredMove> = None;

        for candidate in self.scored_moves(board) {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        let best = best.ok_or(SearchError::NoLegalMove)?;
        debug!(position = %best.position, score = best.score, "Selected move");
        Ok(best.position)
    }

    /// Scores every empty square, in ascending index order.
    pub fn scored_moves(&self, board: &Board) -> Vec<ScoredMove> {
        board
            .empty_positions()
            .map(|position| ScoredMove {
                position,
                score: self.score(&board.with(position, self.maximizing), 0, false),
            })
            .collect()
    }

    /// Minimax value of `board` with `depth` plies already searched.
    ///
    /// `is_maximizing` says whose mark is placed next.
    pub fn score(&self, board: &Board, depth: u32, is_maximizing: bool) -> i32 {
        match evaluate(board) {
            Outcome::WonBy(p) if p == self.maximizing => return WIN_SCORE,
            Outcome::WonBy(_) => return LOSS_SCORE,
            Outcome::Tie => return NEUTRAL_SCORE,
            Outcome::Undecided => {}
        }
        if depth >= self.max_depth {
            return NEUTRAL_SCORE;
        }

        let (mover, next) = if is_maximizing {
            (self.maximizing, false)
        } else {
            (self.minimizing, true)
        };
        let scores = board
            .empty_positions()
            .map(|pos| self.score(&board.with(pos, mover), depth + 1, next));

        let best = if is_maximizing { scores.max() } else { scores.min() };
        // Undecided boards always have an empty square.
        best.unwrap_or(NEUTRAL_SCORE)
    }
}

/// Picks a move for `maximizing` with a fresh [`Minimax`].
pub fn select_move(
    board: &Board,
    maximizing: Player,
    minimizing: Player,
    max_depth: u32,
) -> Result<Position, SearchError> {
    Minimax::with_sides(maximizing, minimizing, max_depth)?.select_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_immediate_win() {
        let board: Board = "XX.O.....".parse().unwrap();
        let engine = Minimax::new(Player::O, 2);
        assert_eq!(engine.select_move(&board), Ok(Position::TopRight));
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // O can win at 5; X threatens at 2.
        let board: Board = "XX.OO.X..".parse().unwrap();
        let engine = Minimax::new(Player::O, 2);
        assert_eq!(engine.select_move(&board), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let engine = Minimax::new(Player::O, 2);
        assert_eq!(engine.select_move(&board), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn test_identical_marks_rejected() {
        assert_eq!(
            Minimax::with_sides(Player::O, Player::O, 2),
            Err(SearchError::IdenticalMarks(Player::O))
        );
    }

    #[test]
    fn test_depth_zero_only_sees_own_wins() {
        // X threatens 2, but at depth 0 the reply is never searched.
        let board: Board = "XX.O.....".parse().unwrap();
        let engine = Minimax::new(Player::O, 0);
        let scores = engine.scored_moves(&board);
        assert!(scores.iter().all(|s| s.score == NEUTRAL_SCORE));
        assert_eq!(engine.select_move(&board), Ok(Position::TopRight));
    }

    #[test]
    fn test_score_of_terminal_boards() {
        let engine = Minimax::new(Player::O, 2);
        let o_wins: Board = "OOOXX.X..".parse().unwrap();
        let x_wins: Board = "XXXOO....".parse().unwrap();
        let tie: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(engine.score(&o_wins, 0, true), WIN_SCORE);
        assert_eq!(engine.score(&x_wins, 0, true), LOSS_SCORE);
        assert_eq!(engine.score(&tie, 0, false), NEUTRAL_SCORE);
    }

    #[test]
    fn test_cutoff_scores_neutral() {
        let engine = Minimax::new(Player::O, 2);
        let board: Board = "X........".parse().unwrap();
        assert_eq!(engine.score(&board, 2, true), NEUTRAL_SCORE);
    }
}
