//! Rejections returned by the history store.
//!
//! Neither of these is a failure in the usual sense: clicking an occupied
//! square or a finished board is an ordinary user action. The store leaves
//! its state untouched and reports why.

use super::Position;

/// Why a move was not played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Why a jump through history was not taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested move is past the end of history.
    #[display("Move #{} does not exist (history has {} entries)", requested, len)]
    OutOfRange {
        /// Move number that was asked for.
        requested: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
