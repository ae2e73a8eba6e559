//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} apply_move {Q}. Preconditions always run and reject the move;
//! postconditions run in debug builds and guard the session invariants.

use super::action::{Move, MoveError, MoveOrigin};
use super::invariants::{InvariantSet, SessionInvariants};
use super::{GameMode, GameSession, Mark};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(state: &S) -> Result<(), MoveError>;
}

/// Precondition: no move is accepted once the game has ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] on a won or tied board.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::SquareOccupied`].
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: it must be the mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects with [`MoveError::WrongPlayer`].
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if mov.mark == session.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.mark))
        }
    }
}

/// Precondition: in AI mode, humans play X and the AI plays O.
pub struct OriginMayMove;

impl OriginMayMove {
    /// Rejects moves from the side that is not currently allowed to act.
    #[instrument(skip(session))]
    pub fn check(origin: MoveOrigin, session: &GameSession) -> Result<(), MoveError> {
        match (session.mode(), origin) {
            (GameMode::TwoPlayer, MoveOrigin::Human) => Ok(()),
            (GameMode::TwoPlayer, MoveOrigin::Ai) => Err(MoveError::AiInactive),
            (GameMode::VsAi, MoveOrigin::Human) if session.to_move() != Mark::X => {
                Err(MoveError::NotHumanTurn)
            }
            (GameMode::VsAi, MoveOrigin::Ai) if session.to_move() != Mark::O => {
                Err(MoveError::NotAiTurn)
            }
            (GameMode::VsAi, _) => Ok(()),
        }
    }
}

/// Composite precondition: checks run in a fixed order, first failure wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, origin: MoveOrigin, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        SquareIsEmpty::check(mov, session)?;
        PlayersTurn::check(mov, session)?;
        OriginMayMove::check(origin, session)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: game not over, square empty, mark to move, origin allowed.
/// Postconditions: [`SessionInvariants`].
pub struct MoveContract;

impl Contract<GameSession, (Move, MoveOrigin)> for MoveContract {
    fn pre(session: &GameSession, (action, origin): &(Move, MoveOrigin)) -> Result<(), MoveError> {
        LegalMove::check(action, *origin, session)
    }

    fn post(session: &GameSession) -> Result<(), MoveError> {
        SessionInvariants::check_all(session).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariant violated");
            MoveError::InvariantViolation(descriptions)
        })
    }
}
