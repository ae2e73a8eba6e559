//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second; the AI in [`GameMode::VsAi`]).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored row-major, so `index = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from explicit squares, row-major.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// Only the session writes to a live board, after validating the move.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    pub(crate) fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        self.set(pos, Square::Occupied(mark));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the marks on the board, `None` for empty squares.
    pub fn cells(&self) -> [Option<Mark>; 9] {
        self.squares.map(Square::mark)
    }

    /// Counts the squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Input did not contain exactly nine cells.
    #[display("Board needs 9 cells, found {found}")]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },
    /// A cell character was not a mark or an empty marker.
    #[display("Invalid cell '{character}' at index {index}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Cell index of the character.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells like `"XX.OO...."`.
    ///
    /// `X`/`O` in either case are marks; `.`, `-`, `_` and space are empty.
    /// Row separators `|` and `/` and newlines are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength { found: cells.len() });
        }

        let mut squares = [Square::Empty; 9];
        for (index, character) in cells.into_iter().enumerate() {
            squares[index] = match character {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                _ => return Err(BoardParseError::InvalidCharacter { character, index }),
            };
        }
        Ok(Self { squares })
    }
}

/// Who supplies O's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// The human plays X against the heuristic AI playing O.
    VsAi,
}

impl GameMode {
    /// Returns the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsAi,
            GameMode::VsAi => GameMode::TwoPlayer,
        }
    }

    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsAi => "Play with AI",
        }
    }

    /// Returns the label of the action that switches away from this mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Switch to AI Mode",
            GameMode::VsAi => "Switch to Two Player Mode",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Mark::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_with_row_separators() {
        let board: Board = "xox/.o./x..".parse().unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Mark::X));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err, BoardParseError::WrongLength { found: 2 });
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "XX?OO....".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            BoardParseError::InvalidCharacter {
                character: '?',
                index: 2
            }
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(GameMode::TwoPlayer.toggle(), GameMode::VsAi);
        assert_eq!(GameMode::VsAi.toggle(), GameMode::TwoPlayer);
    }

    #[test]
    fn test_mode_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GameMode::VsAi).unwrap(),
            "\"vs-ai\""
        );
    }
}
