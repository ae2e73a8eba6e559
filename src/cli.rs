//! Command-line interface for tictactoe_duel.

use crate::games::tictactoe::GameMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic Tac Toe - two players, or one player against a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Two-mode tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe_duel.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Tui {
        /// Mode of the first game
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Delay before the AI answers, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// File to write logs to while the UI owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a list of cell selections and print the result
    Script {
        /// Game mode; in vs-ai mode the AI answers every accepted move
        #[arg(long, value_enum, default_value = "two-player")]
        mode: ModeArg,

        /// Cells to select, by index (0-8) or label (e.g. top-left)
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans share the board
    TwoPlayer,
    /// Play X against the AI
    VsAi,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::VsAi => GameMode::VsAi,
        }
    }
}
