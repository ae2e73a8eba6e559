//! Serializable render snapshot of a session.

use super::action::Move;
use super::{Board, GameMode, GameSession, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw the game and gate input.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Row-major cells; `None` is an empty square.
    cells: [Option<Mark>; 9],
    /// Mark to move next.
    to_move: Mark,
    /// Current outcome.
    outcome: Outcome,
    /// Current mode.
    mode: GameMode,
    /// Accepted moves in order.
    history: Vec<Move>,
    /// Whether a human cell selection would currently be accepted.
    input_enabled: bool,
}

impl Snapshot {
    /// Heading for the current mode, e.g. `"Tic Tac Toe - Play with AI"`.
    pub fn title(&self) -> String {
        format!("Tic Tac Toe - {}", self.mode.label())
    }

    /// One-line status: the result once decided, otherwise whose turn it is.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::InProgress if self.mode == GameMode::VsAi && self.to_move == Mark::O => {
                "AI is thinking...".to_string()
            }
            Outcome::InProgress => format!("Player {}'s turn", self.to_move),
            decided => decided.to_string(),
        }
    }

    /// The board rebuilt from the cells.
    pub fn board(&self) -> Board {
        Board::from_squares(self.cells.map(|cell| match cell {
            Some(mark) => super::Square::Occupied(mark),
            None => super::Square::Empty,
        }))
    }
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        Self {
            cells: session.board().cells(),
            to_move: session.to_move(),
            outcome: session.outcome(),
            mode: session.mode(),
            history: session.history().to_vec(),
            input_enabled: session.is_human_turn(),
        }
    }
}
