//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::history::History;
use super::super::Square;
use super::Invariant;

/// Invariant: every snapshot equals its predecessor plus one mark.
///
/// The new mark sits at the snapshot's recorded position, that square was
/// empty before, and no other square changed.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.placed() else {
                return false;
            };
            let Square::Occupied(player) = after.board().get(pos) else {
                return false;
            };
            before.board().is_empty(pos) && before.board().with_mark(pos, player) == *after.board()
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (one new mark per move, never overwritten)"
    }
}
