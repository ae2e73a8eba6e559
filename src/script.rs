//! Non-interactive driver: feeds cell selections into a session.

use crate::games::tictactoe::{GameMode, GameSession, MoveError, MoveOrigin, Position, Snapshot};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A selection the engine (or the parser) refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Rejection {
    /// The selection as given.
    pub input: String,
    /// Why it was refused.
    pub reason: String,
}

/// Result of a scripted game.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct ScriptReport {
    /// Final state of the session.
    snapshot: Snapshot,
    /// Squares the AI took, in order.
    ai_moves: Vec<Position>,
    /// Selections that were not applied.
    rejected: Vec<Rejection>,
}

impl ScriptReport {
    /// Title, board, status and any rejections as plain text.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n\n{}",
            self.snapshot.title(),
            self.snapshot.board().display(),
            self.snapshot.status_line()
        );
        for rejection in &self.rejected {
            out.push_str(&format!("\nrejected {}: {}", rejection.input, rejection.reason));
        }
        out
    }
}

/// Applies each selection as a human move with the mark to move.
///
/// Selections are indices (0-8) or position labels. In [`GameMode::VsAi`]
/// the AI answers immediately after every accepted move. Refused selections
/// are recorded and skipped; play continues with the next one.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn run_script(mode: GameMode, moves: &[String]) -> ScriptReport {
    let mut session = GameSession::with_mode(mode);
    let mut ai_moves = Vec::new();
    let mut rejected = Vec::new();

    for input in moves {
        let result = match input.trim().parse::<usize>() {
            Ok(index) => {
                let mark = session.to_move();
                session.apply_move_at(index, mark, MoveOrigin::Human)
            }
            Err(_) => match Position::from_label(input) {
                Some(position) => session.play_human(position),
                None => {
                    warn!(%input, "Unrecognized cell");
                    rejected.push(Rejection::new(input.clone(), "Unrecognized cell".to_string()));
                    continue;
                }
            },
        };

        if let Err(e) = result {
            warn!(%input, error = %e, "Selection rejected");
            rejected.push(Rejection::new(input.clone(), e.to_string()));
            continue;
        }

        if session.is_ai_turn() {
            match session.play_ai() {
                Ok(position) => ai_moves.push(position),
                Err(MoveError::NoMoveAvailable) => {}
                Err(e) => warn!(error = %e, "AI move failed"),
            }
        }
    }

    info!(outcome = %session.outcome(), "Script finished");
    ScriptReport {
        snapshot: session.snapshot(),
        ai_moves,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Outcome};

    fn moves(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_labels_and_indices_mix() {
        let report = run_script(GameMode::TwoPlayer, &moves(&["top-left", "4", "1"]));
        assert!(report.rejected().is_empty());
        assert_eq!(report.snapshot().history().len(), 3);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let report = run_script(GameMode::TwoPlayer, &moves(&["corner"]));
        assert_eq!(
            report.rejected(),
            &vec![Rejection::new("corner".into(), "Unrecognized cell".into())]
        );
    }

    #[test]
    fn test_ai_answers_each_move() {
        // X at 0; AI has nothing to win or block, takes 1.
        // X at 4; X threatens 8 on the diagonal, AI blocks 8.
        let report = run_script(GameMode::VsAi, &moves(&["0", "4"]));
        assert_eq!(report.ai_moves(), &vec![Position::TopCenter, Position::BottomRight]);
        assert_eq!(report.snapshot().to_move(), &Mark::X);
        assert_eq!(report.snapshot().outcome(), &Outcome::InProgress);
    }

    #[test]
    fn test_render_text_lists_rejections() {
        let report = run_script(GameMode::TwoPlayer, &moves(&["0", "0", "9"]));
        let text = report.render_text();
        assert!(text.starts_with("Tic Tac Toe - Two Player"));
        assert!(text.contains("rejected 0: Square Top-left is already occupied"));
        assert!(text.contains("rejected 9: Position 9 is out of range (must be 0-8)"));
    }
}
