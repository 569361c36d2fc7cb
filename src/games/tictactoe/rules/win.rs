//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// The eight winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first line in [`LINES`] order that
/// they fully occupy, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}
