//! Timeline Tic-Tac-Toe - Unified CLI
//!
//! Play interactively in the terminal, or replay a list of moves and print
//! the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timeline_tictactoe::{DisplayOrder, TuiConfig, render, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, order } => run_play(config, order),
        Command::Replay { moves, jump, order } => run_replay(&moves, jump, order),
    }
}

/// Run the interactive terminal UI
fn run_play(config: Option<std::path::PathBuf>, order: Option<DisplayOrder>) -> Result<()> {
    let mut config = TuiConfig::load(config.as_deref()).context("Failed to load configuration")?;
    if let Some(order) = order {
        config = config.with_move_order(order);
    }
    run_tui(&config)
}

/// Replay moves and print the final position
fn run_replay(moves: &[usize], jump: Option<usize>, order: DisplayOrder) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (history, skipped) = replay(moves, jump).context("Replay failed")?;
    info!(
        played = history.len() - 1,
        skipped = skipped.len(),
        outcome = %history.outcome(),
        "Replay finished"
    );

    print!("{}", render(&history, order));
    Ok(())
}
