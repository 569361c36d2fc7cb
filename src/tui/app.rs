//! Application state and logic.

use crate::games::tictactoe::{History, MoveEntry, Position};
use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{layout::Rect, widgets::ListState};
use tracing::{debug, instrument};

use super::input::{Command, Direction, command_for, move_cursor};
use super::order::DisplayOrder;
use super::ui;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the move list.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// The history is the only game state; everything else here is how the
/// player is looking at it.
#[derive(Debug, Getters)]
pub struct App {
    history: History,
    cursor: Position,
    order: DisplayOrder,
    focus: Focus,
    selected_move: usize,
    /// Selection and scroll offset of the move list as last drawn.
    move_list: ListState,
    highlight_winning_line: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(order: DisplayOrder, highlight_winning_line: bool) -> Self {
        Self {
            history: History::new(),
            cursor: Position::Center,
            order,
            focus: Focus::default(),
            selected_move: 0,
            move_list: ListState::default().with_selected(Some(0)),
            highlight_winning_line,
            should_quit: false,
        }
    }

    /// Move list in the current display order.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        self.order.arrange(self.history.move_descriptions())
    }

    /// Screen row of the selected move in the move list.
    pub fn selected_row(&self) -> usize {
        self.order.row_of(self.selected_move, self.history.len())
    }

    /// Move list state synced to the current selection, ready to render.
    pub(super) fn move_list_for_render(&mut self) -> &mut ListState {
        let row = self.selected_row();
        self.move_list.select(Some(row));
        &mut self.move_list
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(command) = command_for(key) else {
            return;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => self.should_quit = true,
            Command::ToggleFocus => self.focus = self.focus.toggle(),
            Command::ToggleOrder => self.order = self.order.toggle(),
            Command::Restart => self.restart(),
            Command::PlayCell(index) => self.play(index),
            Command::Activate => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump(self.selected_move),
            },
            Command::Navigate(direction) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, direction),
                Focus::Moves => self.step_selection(direction),
            },
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`) on a frame
    /// of size `area`.
    #[instrument(skip(self))]
    pub fn click(&mut self, area: Rect, column: u16, row: u16) {
        if let Some(pos) = ui::cell_at(area, column, row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos.to_index());
        } else if let Some(visible_row) = ui::move_row_at(area, column, row) {
            let list_row = self.move_list.offset() + visible_row;
            let len = self.history.len();
            if list_row < len {
                self.focus = Focus::Moves;
                self.jump(self.order.index_at(list_row, len));
            }
        }
    }

    fn play(&mut self, index: usize) {
        match self.history.play(index) {
            Ok(pos) => {
                self.cursor = pos;
                self.selected_move = self.history.current_move();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    fn jump(&mut self, move_number: usize) {
        match self.history.jump_to(move_number) {
            Ok(()) => self.selected_move = move_number,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    fn restart(&mut self) {
        self.history.restart();
        self.selected_move = 0;
        self.cursor = Position::Center;
    }

    fn step_selection(&mut self, direction: Direction) {
        let len = self.history.len();
        let row = self.selected_row();
        let row = match direction {
            Direction::Up => row.saturating_sub(1),
            Direction::Down => (row + 1).min(len - 1),
            Direction::Left | Direction::Right => return,
        };
        self.selected_move = self.order.index_at(row, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Status};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn play_all(app: &mut App, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        play_all(&mut app, "51");
        assert_eq!(app.history().len(), 3);
        assert_eq!(*app.cursor(), Position::TopLeft);
        assert_eq!(app.history().status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.history().current_snapshot().placed(),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        play_all(&mut app, "123");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().current_move(), 1);
        assert_eq!(app.history().len(), 4);
    }

    #[test]
    fn test_toggle_order_keeps_history_and_selection() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        play_all(&mut app, "12");
        let history = app.history().clone();
        assert_eq!(app.selected_row(), 2);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(*app.order(), DisplayOrder::Descending);
        assert_eq!(app.history(), &history);
        assert_eq!(app.selected_row(), 0);
        assert_eq!(*app.move_entries()[0].move_number(), 2);
    }

    #[test]
    fn test_descending_down_moves_back_in_time() {
        let mut app = App::new(DisplayOrder::Descending, true);
        play_all(&mut app, "123");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        assert_eq!(*app.selected_move(), 2);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.history().current_move(), 2);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(DisplayOrder::Ascending, false);
        play_all(&mut app, "159");
        press(&mut app, KeyCode::Char('r'));
        assert!(app.history().has_no_moves());
        assert_eq!(*app.selected_move(), 0);
        assert!(!*app.should_quit());

        press(&mut app, KeyCode::Esc);
        assert!(*app.should_quit());
    }
}
