//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Nothing here looks at move
//! order or history; the history store layers that on top.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, Line, check_winner};
