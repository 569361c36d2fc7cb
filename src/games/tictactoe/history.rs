//! Linear move history with a time-travel cursor.
//!
//! A [`History`] owns every board the game has passed through. The cursor
//! picks which snapshot is "current"; jumping moves only the cursor, while
//! playing from an earlier snapshot discards everything after it.

use super::action::{JumpError, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{Outcome, evaluate};
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A board together with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) placed: Option<Position>,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Snapshot of `board` reached by playing at `placed`.
    pub fn after(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the move that produced this snapshot.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// Row of the move that produced this snapshot.
    pub fn row(&self) -> Option<usize> {
        self.placed.map(Position::row)
    }

    /// Column of the move that produced this snapshot.
    pub fn col(&self) -> Option<usize> {
        self.placed.map(Position::col)
    }
}

/// Status line derived from the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board filled up without a line.
    #[display("Draw!")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One line of the move list offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// Index of the snapshot this entry jumps to.
    move_number: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether the cursor currently sits on this snapshot.
    is_current: bool,
}

/// Ordered snapshots plus the cursor selecting the current one.
///
/// The first snapshot is always the empty board and the cursor always
/// points inside the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) current_move: usize,
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current_move: 0,
        }
    }

    /// Builds a history by playing `moves` in order from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(moves: &[usize]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &index in moves {
            history.play(index)?;
        }
        Ok(history)
    }

    /// Places the next player's mark at `index` (0-8, row-major).
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended, and the cursor moves to it. On rejection nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not a board cell.
    /// - [`MoveError::GameOver`] if the current board is already decided.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(current_move = self.current_move, len = self.snapshots.len()))]
    pub fn play(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = *self.current_board();

        if evaluate(&board).is_decided() {
            debug!("Rejecting move on a finished board");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Rejecting move on an occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let discarded = self.snapshots.len() - (self.current_move + 1);
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots
            .push(Snapshot::after(board.with_mark(pos, player), pos));
        self.current_move = self.snapshots.len() - 1;

        debug_assert!(HistoryInvariants::check_all(self).is_ok());
        debug!(%player, position = %pos, discarded, move_number = self.current_move, "Move played");
        Ok(pos)
    }

    /// Moves the cursor to `move_number` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if no such snapshot exists.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number >= self.snapshots.len() {
            debug!("Rejecting jump past the end of history");
            return Err(JumpError::OutOfRange {
                requested: move_number,
                len: self.snapshots.len(),
            });
        }
        self.current_move = move_number;
        Ok(())
    }

    /// Drops every move and returns to the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.snapshots.len() - 1, "Restarting game");
        self.snapshots.truncate(1);
        self.current_move = 0;
    }

    /// All snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no move has been recorded yet, i.e. only the empty start
    /// snapshot exists.
    pub fn has_no_moves(&self) -> bool {
        self.snapshots.len() == 1
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The snapshot under the cursor.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.current_move]
    }

    /// The board under the cursor.
    pub fn current_board(&self) -> &Board {
        self.current_snapshot().board()
    }

    /// Whether X moves next, derived from cursor parity.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player to move from the current snapshot.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Classification of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Status line for the current board.
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Win(player, _) => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::NoWinner => Status::NextPlayer(self.next_player()),
        }
    }

    /// One entry per snapshot, in chronological order.
    pub fn move_descriptions(&self) -> Vec<MoveEntry> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(move_number, snapshot)| {
                let is_current = move_number == self.current_move;
                let label = match (snapshot.row(), snapshot.col()) {
                    (Some(row), Some(col)) if is_current => {
                        format!("You are at move #{move_number} ({row}, {col})")
                    }
                    (Some(row), Some(col)) => format!("Go to move #{move_number} ({row}, {col})"),
                    _ => "Go to game start".to_string(),
                };
                MoveEntry {
                    move_number,
                    label,
                    is_current,
                }
            })
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
