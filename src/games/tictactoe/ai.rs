//! One-ply heuristic opponent.
//!
//! The AI always plays O. It takes an immediate win if one exists, otherwise
//! blocks an immediate X win, otherwise takes the first empty square. There is
//! no deeper search; forks and two-move threats are ignored.

use super::rules::{check_winner, evaluate_outcome};
use super::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Picks the AI's move for `board`.
///
/// Returns `None` when the board is full or already decided.
#[instrument]
pub fn select_ai_move(board: &Board) -> Option<Position> {
    if evaluate_outcome(board).is_terminal() {
        debug!("Board already decided, no AI move");
        return None;
    }

    let empty = Position::valid_moves(board);

    if let Some(pos) = first_completing(board, &empty, Mark::O) {
        debug!(position = %pos, "AI takes winning square");
        return Some(pos);
    }

    if let Some(pos) = first_completing(board, &empty, Mark::X) {
        debug!(position = %pos, "AI blocks opponent");
        return Some(pos);
    }

    let fallback = empty.first().copied();
    debug!(position = ?fallback, "AI takes first empty square");
    fallback
}

/// First empty square (ascending) where `mark` would complete a line.
fn first_completing(board: &Board, empty: &[Position], mark: Mark) -> Option<Position> {
    empty
        .iter()
        .copied()
        .find(|pos| check_winner(&board.with_mark(*pos, mark)) == Some(mark))
}
