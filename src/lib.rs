//! Tic Tac Toe duel - two players on one board, or one against a heuristic AI.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine ([`GameSession`], [`evaluate_outcome`],
//!   [`select_ai_move`])
//! - **TUI**: ratatui front end that owns the delayed, cancelable AI turn
//! - **Script**: headless runner for a list of cell selections
//! - **Config**: TOML settings with CLI overrides
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameMode, GameSession, Mark, Outcome, Position};
//!
//! let mut session = GameSession::with_mode(GameMode::VsAi);
//! session.play_human(Position::Center)?;
//! let reply = session.play_ai()?;
//! assert_eq!(reply, Position::TopLeft);
//! assert_eq!(session.to_move(), Mark::X);
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_duel::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
pub mod games;
mod script;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command, ModeArg};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Presentation
pub use script::{Rejection, ScriptReport, run_script};
pub use tui::{AiTurnDue, AiTurnScheduler, App, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, GameMode, GameSession, LINES, Mark, Move, MoveError, MoveOrigin,
    Outcome, Position, Snapshot, Square, evaluate_outcome, select_ai_move,
};
