//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::history::History;
use super::super::Player;
use super::Invariant;

/// Invariant: the mark added by snapshot `m` belongs to the player whose
/// turn it was after `m - 1` moves. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(move_number, snapshot)| match snapshot.placed() {
                Some(pos) => {
                    snapshot.board().get(pos).player() == Some(Player::for_move(move_number - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
