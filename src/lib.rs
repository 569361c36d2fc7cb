//! Timeline Tic-Tac-Toe library - tic-tac-toe with time travel
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (`evaluate`, win and draw detection)
//! - **History**: snapshots plus a cursor; `play` and `jump_to`
//! - **Invariants**: properties every reachable history satisfies
//! - **TUI**: ratatui front end that reads and drives the history
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{History, Outcome, Player, Position, Status};
//!
//! let mut history = History::new();
//! for cell in [4, 0, 1, 7, 2] {
//!     history.play(cell).unwrap();
//! }
//! assert_eq!(history.status(), Status::NextPlayer(Player::O));
//!
//! history.jump_to(1).unwrap();
//! assert!(!history.x_is_next());
//! assert_eq!(history.outcome(), Outcome::NoWinner);
//! assert_eq!(history.current_snapshot().placed(), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod report;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, History, JumpError, LINES, Line, MoveEntry, MoveError, Outcome, Player, Position,
    Snapshot, Square, Status, check_winner, evaluate, is_draw, is_full,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, CursorInRangeInvariant, EmptyStartInvariant, HistoryInvariants,
    Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TuiConfig};

// Crate-level exports - Replay
pub use report::{SkippedMove, render, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Command, Direction, DisplayOrder, Focus, command_for, move_cursor, run_tui};
