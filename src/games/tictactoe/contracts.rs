//! Contract-based validation for tic-tac-toe moves.
//!
//! Preconditions are checked before a move touches the board;
//! board consistency is asserted afterwards in debug builds.

use super::action::{Move, MoveError};
use super::typestate::GameInProgress;
use super::{Board, Player};
use tracing::{instrument, warn};

/// A contract defines the preconditions for applying an action to a state.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the target is taken.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] if the mover is out of turn.
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Square must be empty
/// - Must be player's turn
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    #[instrument(skip(game, action), fields(action = %action))]
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        SquareIsEmpty::check(action, game)?;
        PlayersTurn::check(action, game)?;
        Ok(())
    }
}

/// Invariant: mark counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true when the board could have come from alternating play.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Asserts that board invariants hold (panics on violation in debug builds).
pub fn assert_invariants(game: &GameInProgress) {
    debug_assert!(BoardConsistent::holds(game.board()), "Board consistency violated");
    debug_assert_eq!(
        game.board().squares().iter().filter(|s| s.player().is_some()).count(),
        game.history().len(),
        "History does not match board"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameResult, GameSetup, Position};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::X, Position::Center);

        let Ok(GameResult::InProgress(game)) = game.make_move(action) else {
            panic!("Expected in-progress game");
        };
        let action2 = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action2),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameSetup::new().start(Player::X);
        let action = Move::new(Player::O, Position::Center);

        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_board_consistency() {
        assert!(BoardConsistent::holds(&"XO.......".parse().unwrap()));
        assert!(BoardConsistent::holds(&"X........".parse().unwrap()));
        assert!(!BoardConsistent::holds(&"XX.......".parse().unwrap()));
    }
}
