//! tictactoe_duel - unified CLI
//!
//! Plays in the terminal UI by default; `script` runs a game headlessly.

use anyhow::Result;
use clap::Parser;
use tictactoe_duel::{Cli, Command, Config, GameMode, run_script, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }

    match cli.command.unwrap_or(Command::Tui {
        mode: None,
        ai_delay_ms: None,
        log_file: None,
    }) {
        Command::Tui {
            mode,
            ai_delay_ms,
            log_file,
        } => {
            if let Some(mode) = mode {
                config = config.with_mode(mode.into());
            }
            if let Some(ms) = ai_delay_ms {
                config = config.with_ai_delay_ms(ms);
            }
            if let Some(path) = log_file {
                config = config.with_log_file(path);
            }
            run_tui(config).await
        }
        Command::Script { mode, moves, json } => run_script_command(&config, mode.into(), &moves, json),
    }
}

/// Runs a scripted game, logging to stderr and printing the result to stdout.
fn run_script_command(config: &Config, mode: GameMode, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?mode, moves = moves.len(), "Running script");
    let report = run_script(mode, moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
