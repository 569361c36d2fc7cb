//! Terminal UI for the game.

mod app;
mod input;
mod order;
mod ui;

pub use app::{App, Focus};
pub use input::{Command, Direction, command_for, move_cursor};
pub use order::DisplayOrder;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{error, info, instrument};

use crate::config::TuiConfig;

/// Runs the interactive game until the player quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    init_file_logging(config)?;

    info!(order = %config.move_order(), "Starting Timeline Tic-Tac-Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.move_order(), *config.highlight_winning_line());
    let res = run_app(&mut terminal, &mut app);

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
    info!(moves = app.history().len() - 1, "TUI exited");
    res
}

/// Logs go to a file so they don't interfere with the TUI.
fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, read one event, apply it; repeat until quit.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut area = Rect::default();
    while !*app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, app);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(area, mouse.column, mouse.row)
            }
            _ => {}
        }
    }
    Ok(())
}
