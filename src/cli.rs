//! Command-line interface for timeline_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timeline_tictactoe::DisplayOrder;

/// Timeline Tic-Tac-Toe - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Initial order of the move list (overrides the config file)
        #[arg(long, value_enum)]
        order: Option<DisplayOrder>,
    },

    /// Play a list of cell indices (0-8) and print the result
    Replay {
        /// Cell indices in play order
        moves: Vec<usize>,

        /// Move number to jump to after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Order of the printed move list
        #[arg(long, value_enum, default_value = "ascending")]
        order: DisplayOrder,
    },
}
