//! Plain-text replay of a game, for non-interactive use.

use crate::games::tictactoe::{History, JumpError, MoveError};
use crate::tui::DisplayOrder;
use tracing::{instrument, warn};

/// A requested move that the history rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Skipped cell {}: {}", index, reason)]
pub struct SkippedMove {
    /// Cell index that was requested.
    pub index: usize,
    /// Why it was not played.
    pub reason: MoveError,
}

/// Plays `moves` in order, skipping rejected ones, then optionally jumps.
///
/// # Errors
///
/// Returns [`JumpError`] if `jump` names a move past the end of history.
#[instrument]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
) -> Result<(History, Vec<SkippedMove>), JumpError> {
    let mut history = History::new();
    let mut skipped = Vec::new();

    for &index in moves {
        if let Err(reason) = history.play(index) {
            warn!(index, %reason, "Skipping rejected move");
            skipped.push(SkippedMove { index, reason });
        }
    }

    if let Some(move_number) = jump {
        history.jump_to(move_number)?;
    }

    Ok((history, skipped))
}

/// Renders the current board, status and move list as text.
///
/// The move list follows `order`; the current move is marked with `>`.
pub fn render(history: &History, order: DisplayOrder) -> String {
    let mut out = history.current_board().display();
    out.push_str("\n\n");
    out.push_str(&history.status().to_string());
    out.push_str(&format!("\n\nMoves ({order}):\n"));
    for entry in order.arrange(history.move_descriptions()) {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label()));
    }
    out
}
