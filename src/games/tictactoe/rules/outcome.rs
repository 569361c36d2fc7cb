//! Board classification: winner, draw, or still open.

use super::super::{Board, Player, Position};
use super::draw::is_full;
use super::win::{Line, check_winner};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    NoWinner,
    /// Every square is occupied and no line is complete.
    Draw,
    /// A player holds a complete line.
    Win(Player, Line),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player, _) => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }

    /// Whether `pos` is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(&pos))
    }

    /// Returns true once no further moves may be played.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::NoWinner)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoWinner => write!(f, "In progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win(player, [a, b, c]) => write!(
                f,
                "{} wins on {}, {}, {}",
                player,
                a.to_index(),
                b.to_index(),
                c.to_index()
            ),
        }
    }
}

/// Classifies a board.
///
/// Lines are checked in the fixed order of [`super::LINES`]; on a board
/// with more than one complete line the earliest one is reported. Total
/// over every arrangement of squares, legal or not.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Win(player, line)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::NoWinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoWinner);
    }

    #[test]
    fn test_top_row_win_reports_line() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let outcome = evaluate(&board);
        assert_eq!(
            outcome,
            Outcome::Win(
                Player::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            )
        );
        assert!(outcome.highlights(Position::TopCenter));
        assert!(!outcome.highlights(Position::Center));
        assert_eq!(outcome.to_string(), "X wins on 0, 1, 2");
    }

    #[test]
    fn test_open_and_drawn_display() {
        assert_eq!(Outcome::NoWinner.to_string(), "In progress");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Player::{O, X};
        let marks = [X, O, X, X, O, O, O, X, X];
        let squares = marks.map(Square::Occupied);
        let outcome = evaluate(&Board::from_squares(squares));
        assert_eq!(outcome, Outcome::Draw);
        assert!(outcome.is_decided());
        assert_eq!(outcome.winner(), None);
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        use Player::{O, X};
        let marks = [X, O, X, O, X, O, O, X, X];
        let outcome = evaluate(&Board::from_squares(marks.map(Square::Occupied)));
        assert_eq!(outcome.winner(), Some(X));
        assert_eq!(
            outcome.winning_line(),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
    }
}
