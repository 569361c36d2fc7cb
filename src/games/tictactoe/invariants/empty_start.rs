//! Empty start invariant: every history begins at the empty board.

use super::super::history::{History, Snapshot};
use super::Invariant;

/// Invariant: the first snapshot is the empty board with no move.
pub struct EmptyStartInvariant;

impl Invariant<History> for EmptyStartInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no move"
    }
}
