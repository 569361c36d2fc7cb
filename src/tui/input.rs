//! Keyboard mapping for the game screen.

use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the game.
    Quit,
    /// Switch focus between the board and the move list.
    ToggleFocus,
    /// Flip the move list between ascending and descending.
    ToggleOrder,
    /// Clear the board and the history.
    Restart,
    /// Play the given cell index directly.
    PlayCell(usize),
    /// Play the board cursor or jump to the selected move.
    Activate,
    /// Move the board cursor or the move selection.
    Navigate(Direction),
}

/// Maps a key event to a command, if the key means anything.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::ToggleFocus),
        KeyCode::Char('s') => Some(Command::ToggleOrder),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::PlayCell(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Up => Some(Command::Navigate(Direction::Up)),
        KeyCode::Down => Some(Command::Navigate(Direction::Down)),
        KeyCode::Left => Some(Command::Navigate(Direction::Left)),
        KeyCode::Right => Some(Command::Navigate(Direction::Right)),
        _ => None,
    }
}

/// Moves the board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
