//! First-class invariants for a tic-tac-toe session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move and after every reset. They are checked in debug builds.

use super::rules::evaluate_outcome;
use super::{GameSession, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: marks alternate X, O, X, ... and `to_move` follows the count.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if history.first().is_some_and(|m| m.mark != Mark::X) {
            return false;
        }
        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        session.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, ...) and the turn flag follows the move count"
    }
}

/// Invariant: every move in history is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == session.history().len()
            && session
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.mark))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}

/// Invariant: the stored outcome is the one derived from the board.
pub struct OutcomeDerivedInvariant;

impl Invariant<GameSession> for OutcomeDerivedInvariant {
    fn holds(session: &GameSession) -> bool {
        session.outcome() == evaluate_outcome(session.board())
    }

    fn description() -> &'static str {
        "Outcome equals the outcome evaluated from the board"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    OutcomeDerivedInvariant,
);
