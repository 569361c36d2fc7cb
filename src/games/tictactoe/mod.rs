//! Tic-tac-toe with a time-travel move history.

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, MoveError};
pub use history::{History, MoveEntry, Snapshot, Status};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, is_draw, is_full};
pub use types::{Board, Player, Square};
