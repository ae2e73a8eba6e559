//! Application state and logic.

use super::input::{Action, action_for_key, move_cursor};
use super::scheduler::{AiTurnDue, AiTurnScheduler};
use crate::games::tictactoe::{GameMode, GameSession, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the one [`GameSession`]; every mutation happens on the event loop
/// that owns this struct.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    scheduler: AiTurnScheduler,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(mode: GameMode, scheduler: AiTurnScheduler) -> Self {
        let session = GameSession::with_mode(mode);
        Self {
            status_message: session.snapshot().status_line(),
            session,
            cursor: Position::Center,
            scheduler,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the AI's move is scheduled but not yet played.
    pub fn ai_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        match action {
            Action::Select(position) => {
                self.cursor = position;
                self.select(position);
            }
            Action::SelectCursor => {
                self.select(self.cursor);
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Reset => self.reset(),
            Action::ToggleMode => self.toggle_mode(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Forwards a human cell selection to the engine.
    ///
    /// Returns true if the move was applied. In AI mode an accepted move
    /// that leaves O to play schedules the AI's answer.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> bool {
        if !self.session.is_human_turn() || !self.session.board().is_empty(position) {
            debug!("Selection ignored by input guard");
            return false;
        }

        match self.session.play_human(position) {
            Ok(_) => {
                self.refresh_status();
                if self.session.is_ai_turn() {
                    self.scheduler.schedule();
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "Engine rejected selection");
                self.status_message = format!("Invalid move: {}", e);
                false
            }
        }
    }

    /// Plays the AI's move if `due` is current and the session still wants it.
    ///
    /// Returns the square taken, or `None` for stale or no-longer-valid events.
    #[instrument(skip(self))]
    pub fn on_ai_turn_due(&mut self, due: AiTurnDue) -> Option<Position> {
        if !self.scheduler.claim(due) {
            return None;
        }
        if !self.session.is_ai_turn() {
            debug!("AI turn no longer applies");
            return None;
        }

        match self.session.play_ai() {
            Ok(position) => {
                info!(%position, "AI moved");
                self.refresh_status();
                Some(position)
            }
            Err(e) => {
                warn!(error = %e, "AI move rejected");
                None
            }
        }
    }

    /// Restarts the game in the current mode.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.scheduler.cancel();
        self.session.reset_session(None);
        self.refresh_status();
    }

    /// Switches mode, which restarts the game.
    pub fn toggle_mode(&mut self) {
        self.scheduler.cancel();
        self.session.toggle_mode();
        info!(mode = ?self.session.mode(), "Mode switched");
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status_message = self.session.snapshot().status_line();
    }
}
