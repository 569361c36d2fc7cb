//! Cursor invariant: the current move always names a real snapshot.

use super::super::history::History;
use super::Invariant;

/// Invariant: `current_move` indexes into the snapshots.
pub struct CursorInRangeInvariant;

impl Invariant<History> for CursorInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.current_move() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
