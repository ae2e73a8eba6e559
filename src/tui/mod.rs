//! Terminal UI for tictactoe_duel.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::App;
pub use scheduler::{AiTurnDue, AiTurnScheduler};

use ui::draw;

use crate::config::Config;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// How long the loop waits for a key before checking for AI events.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the terminal UI until the user quits.
///
/// Logs go to the configured file so they do not corrupt the screen.
pub async fn run_tui(config: Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = ?config.mode(), ai_delay_ms = config.ai_delay_ms(), "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (ai_tx, mut ai_rx) = mpsc::unbounded_channel();
    let app = App::new(*config.mode(), AiTurnScheduler::new(config.ai_delay(), ai_tx));

    let res = run_app(&mut terminal, app, &mut ai_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, drain AI events, read one key; repeat until quit.
#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    ai_rx: &mut mpsc::UnboundedReceiver<AiTurnDue>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        while let Ok(due) = ai_rx.try_recv() {
            app.on_ai_turn_due(due);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
