//! Game phase as derived from the board.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a board: still playing, won, or tied.
///
/// Never stored independently of the board; the session recomputes it
/// after every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "winner", rename_all = "lowercase")]
pub enum Outcome {
    /// No line is complete and an empty square remains.
    #[default]
    InProgress,
    /// A line is held entirely by this mark.
    Won(Mark),
    /// The board is full with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game has ended (won or tied).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Winner: {}", mark),
            Outcome::Tie => write!(f, "It's a Tie!"),
        }
    }
}
