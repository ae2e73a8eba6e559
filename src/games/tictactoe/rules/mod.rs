//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the session and the AI share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// A completed line wins (first line in [`LINES`] order), otherwise a full
/// board is a tie, otherwise the game is still in progress. Pure and
/// idempotent.
#[instrument]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_beats_full_board() {
        // Full board whose last move completed a line is a win, not a tie.
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Tie);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let board: Board = "XO.XO.X..".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), evaluate_outcome(&board));
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable by alternating play, but the scan order is fixed:
        // the top row is checked before the middle row.
        let board: Board = "OOOXXX...".parse().unwrap();
        assert_eq!(evaluate_outcome(&board), Outcome::Won(Mark::O));
    }
}
