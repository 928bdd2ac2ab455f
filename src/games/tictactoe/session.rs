//! Human-versus-engine session.
//!
//! Owns the game and drives the turn-taking machine: the human moves
//! first, the engine replies once per turn, and a finished game stays
//! finished until [`Session::reset`].

use super::action::{Move, MoveError};
use super::minimax::{Minimax, SearchError};
use super::rules::Outcome;
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whose turn it is, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    HumanToMove,
    /// Waiting for the engine's move.
    AutomatedToMove,
    /// A player completed a line.
    Won(Player),
    /// The board filled with no line.
    Tied,
}

impl Phase {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Tied)
    }
}

/// Error from a session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The move was illegal.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),

    /// The engine could not pick a move.
    #[display("{}", _0)]
    #[from]
    Search(SearchError),

    /// The human tried to move during the engine's turn.
    #[display("It is the engine's turn")]
    NotHumanTurn,

    /// The engine was asked to move during the human's turn.
    #[display("It is the human's turn")]
    NotAutomatedTurn,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Search(e) => Some(e),
            SessionError::NotHumanTurn | SessionError::NotAutomatedTurn => None,
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    InProgress(GameInProgress),
    Finished(GameFinished),
}

impl From<GameResult> for State {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => State::InProgress(g),
            GameResult::Finished(g) => State::Finished(g),
        }
    }
}

/// A game between a human (first mover) and a [`Minimax`] engine.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Minimax,
    state: State,
}

impl Session {
    /// Starts a session on an empty board with the human to move.
    ///
    /// The human plays the engine's opponent mark.
    #[instrument]
    pub fn new(engine: Minimax) -> Self {
        Self {
            state: State::InProgress(GameSetup::new().start(*engine.minimizing())),
            engine,
        }
    }

    /// The engine driving the automated side.
    pub fn engine(&self) -> &Minimax {
        &self.engine
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        *self.engine.minimizing()
    }

    /// The engine's mark.
    pub fn automated(&self) -> Player {
        *self.engine.maximizing()
    }

    /// Current phase of the turn-taking machine.
    pub fn phase(&self) -> Phase {
        match &self.state {
            State::InProgress(g) if g.to_move() == self.human() => Phase::HumanToMove,
            State::InProgress(_) => Phase::AutomatedToMove,
            State::Finished(g) => match g.outcome() {
                Outcome::WonBy(player) => Phase::Won(player),
                Outcome::Tie | Outcome::Undecided => Phase::Tied,
            },
        }
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        match &self.state {
            State::InProgress(g) => g.board(),
            State::Finished(g) => g.board(),
        }
    }

    /// Every move so far, oldest first.
    pub fn history(&self) -> &[Move] {
        match &self.state {
            State::InProgress(g) => g.history(),
            State::Finished(g) => g.history(),
        }
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        match &self.state {
            State::InProgress(_) => Outcome::Undecided,
            State::Finished(g) => g.outcome(),
        }
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotHumanTurn`] during the engine's turn,
    /// [`MoveError::GameOver`] after the game ended, and
    /// [`MoveError::SquareOccupied`] for a taken square. The session is
    /// unchanged on error.
    #[instrument(skip(self), fields(human = %self.human()))]
    pub fn play_human(&mut self, position: Position) -> Result<Phase, SessionError> {
        match self.phase() {
            Phase::HumanToMove => {}
            Phase::AutomatedToMove => return Err(SessionError::NotHumanTurn),
            Phase::Won(_) | Phase::Tied => return Err(MoveError::GameOver.into()),
        }
        let action = Move::new(self.human(), position);
        self.apply(action)?;
        info!(%position, phase = ?self.phase(), "Human moved");
        Ok(self.phase())
    }

    /// Lets the engine choose and apply its move.
    ///
    /// Returns the chosen position and the phase that follows.
    #[instrument(skip(self), fields(automated = %self.automated()))]
    pub fn play_automated(&mut self) -> Result<(Position, Phase), SessionError> {
        match self.phase() {
            Phase::AutomatedToMove => {}
            Phase::HumanToMove => return Err(SessionError::NotAutomatedTurn),
            Phase::Won(_) | Phase::Tied => return Err(MoveError::GameOver.into()),
        }
        let position = self.engine.select_move(self.board())?;
        self.apply(Move::new(self.automated(), position))?;
        info!(%position, phase = ?self.phase(), "Engine moved");
        Ok((position, self.phase()))
    }

    /// Clears the board and hands the first move back to the human.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous = ?self.phase(), "Resetting session");
        self.state = State::InProgress(GameSetup::new().start(self.human()));
    }

    fn apply(&mut self, action: Move) -> Result<(), MoveError> {
        let State::InProgress(game) = &self.state else {
            return Err(MoveError::GameOver);
        };
        if let Err(e) = game.check(&action) {
            warn!(error = %e, %action, "Rejected move");
            return Err(e);
        }
        let game = game.clone();
        self.state = game.make_move(action)?.into();
        Ok(())
    }
}

/// Plays two engines against each other from an empty board.
///
/// `first` moves first; each engine plays the mark it maximizes for.
///
/// # Errors
///
/// [`SessionError::Search`] if the engines share a mark.
#[instrument(skip_all, fields(first = %first.maximizing(), second = %second.maximizing()))]
pub fn self_play(first: &Minimax, second: &Minimax) -> Result<GameFinished, SessionError> {
    if first.maximizing() == second.maximizing() {
        return Err(SearchError::IdenticalMarks(*first.maximizing()).into());
    }
    let mut game = GameSetup::new().start(*first.maximizing());
    loop {
        let engine = if game.to_move() == *first.maximizing() {
            first
        } else {
            second
        };
        let position = engine.select_move(game.board())?;
        debug!(mark = %game.to_move(), %position, "Self-play move");
        match game.make_move(Move::new(*engine.maximizing(), position))? {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(done) => {
                info!(outcome = %done.outcome(), "Self-play finished");
                return Ok(done);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_waits_for_human() {
        let session = Session::new(Minimax::new(Player::O, 2));
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.human(), Player::X);
        assert_eq!(session.outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_engine_cannot_move_out_of_turn() {
        let mut session = Session::new(Minimax::new(Player::O, 2));
        assert_eq!(session.play_automated(), Err(SessionError::NotAutomatedTurn));
    }

    #[test]
    fn test_occupied_square_leaves_session_untouched() {
        let mut session = Session::new(Minimax::new(Player::O, 2));
        session.play_human(Position::Center).unwrap();
        let (reply, _) = session.play_automated().unwrap();
        let before = *session.board();

        let err = session.play_human(reply).unwrap_err();
        assert_eq!(err, SessionError::Move(MoveError::SquareOccupied(reply)));
        assert_eq!(*session.board(), before);
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_self_play_rejects_shared_mark() {
        let engine = Minimax::new(Player::X, 2);
        assert_eq!(
            self_play(&engine, &engine).err(),
            Some(SessionError::Search(SearchError::IdenticalMarks(Player::X)))
        );
    }
}
