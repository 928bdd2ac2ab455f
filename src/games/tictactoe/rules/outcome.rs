//! Board outcome classification.

use super::super::{Board, Player};
use super::win::check_winner;
use serde::{Deserialize, Serialize};

/// Classification of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one square is empty and no line is complete.
    Undecided,
    /// A player holds a complete line.
    WonBy(Player),
    /// Every square is filled and no line is complete.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(*player),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    /// Returns true if the game ended in a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }

    /// Returns true if no further moves can be made.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::WonBy(player) => write!(f, "{} wins!", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Classifies the board.
///
/// The first complete line in [`LINES`](super::LINES) order decides the
/// winner. A board with two different winning marks cannot arise from
/// legal play and is not treated specially.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::WonBy(player)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let board: Board = "OXXXOOXXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::WonBy(Player::O));
    }

    #[test]
    fn test_alternating_full_board_is_tie() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Tie);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::WonBy(Player::X).winner(), Some(Player::X));
        assert!(Outcome::Tie.is_tie());
        assert!(Outcome::Tie.is_terminal());
        assert!(!Outcome::Undecided.is_terminal());
        assert_eq!(Outcome::WonBy(Player::O).to_string(), "O wins!");
    }
}
