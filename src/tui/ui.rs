//! Stateless UI rendering for the game screen.
//!
//! Layout is computed from the frame area alone, so mouse hit-testing can
//! recompute the same rectangles the last draw used.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{Player, Position, Square, Status};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const MOVES_WIDTH: u16 = 36;

const HELP: &str =
    "arrows move  enter play/jump  1-9 play  tab focus  s sort  r restart  q quit";

struct Regions {
    title: Rect,
    board: Rect,
    status: Rect,
    moves: Rect,
    footer: Rect,
}

fn regions(area: Rect) -> Regions {
    let [title, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(BOARD_HEIGHT + 3),
        Constraint::Length(1),
    ])
    .areas(area);
    let [left, moves] = Layout::horizontal([
        Constraint::Min(BOARD_WIDTH + 2),
        Constraint::Length(MOVES_WIDTH),
    ])
    .areas(body);
    let [board_pane, status] =
        Layout::vertical([Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)]).areas(left);

    Regions {
        title,
        board: center_rect(board_pane, BOARD_WIDTH, BOARD_HEIGHT),
        status,
        moves,
        footer,
    }
}

/// Screen rectangles of the nine cells, in board order.
fn cell_areas(board: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for (i, cell) in cells.iter_mut().enumerate() {
        let (row, col) = (i as u16 / 3, i as u16 % 3);
        *cell = Rect::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board);
    }
    cells
}

/// Board position under terminal cell (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let point = ratatui::layout::Position::new(column, row);
    cell_areas(regions(area).board)
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

/// Visible row of the move list under terminal cell (`column`, `row`),
/// counted from the top of the pane before any scrolling.
pub fn move_row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = regions(area).moves.inner(Margin::new(1, 1));
    inner
        .contains(ratatui::layout::Position::new(column, row))
        .then(|| usize::from(row - inner.y))
}

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let regions = regions(frame.area());

    let title = Paragraph::new("Timeline Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, regions.title);

    draw_board(frame, regions.board, app);
    draw_status(frame, regions.status, app);
    draw_moves(frame, regions.moves, app);

    let footer = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, regions.footer);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.history();
    let board = history.current_board();
    let outcome = history.outcome();
    let cells = cell_areas(area);

    for (pos, cell) in Position::ALL.into_iter().zip(cells) {
        let highlighted = *app.highlight_winning_line() && outcome.highlights(pos);
        let selected = pos == *app.cursor() && *app.focus() == Focus::Board;
        draw_cell(frame, cell, board.get(pos), pos, highlighted, selected);
    }

    let separator = Style::default().fg(Color::DarkGray);
    for row in 0..2 {
        let below = cells[row * 3];
        let line = Rect::new(area.x, below.bottom(), area.width, 1).intersection(area);
        let text = "─".repeat(usize::from(area.width));
        frame.render_widget(Paragraph::new(text).style(separator), line);
    }
    for row in 0..3 {
        for col in 0..2 {
            let left = cells[row * 3 + col];
            let line = Rect::new(left.right(), left.y, 1, left.height).intersection(area);
            let bars: Vec<Line> = (0..left.height).map(|_| Line::from("│")).collect();
            frame.render_widget(Paragraph::new(bars).style(separator), line);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    highlighted: bool,
    selected: bool,
) {
    let (symbol, symbol_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let (cell_style, symbol_style) = if selected {
        (
            Style::default().bg(Color::White),
            symbol_style.bg(Color::White),
        )
    } else if highlighted {
        (
            Style::default().bg(Color::Green),
            symbol_style.bg(Color::Green).fg(Color::Black),
        )
    } else {
        (Style::default(), symbol_style)
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(symbol, symbol_style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(lines)
        .style(cell_style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.history().status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextPlayer(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .move_entries()
        .into_iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(entry.label().clone(), style))
        })
        .collect();

    let (border, highlight) = match app.focus() {
        Focus::Moves => (
            Style::default().fg(Color::Cyan),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Focus::Board => (Style::default(), Style::default()),
    };

    let list = List::new(items)
        .block(
            Block::bordered()
                .border_style(border)
                .title(format!(" Moves ({}) ", app.order())),
        )
        .highlight_style(highlight)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, app.move_list_for_render());
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::order::DisplayOrder;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    const AREA: Rect = Rect::new(0, 0, 80, 24);

    fn render(app: &mut App) -> Terminal<TestBackend> {
        render_in(app, AREA)
    }

    fn render_in(app: &mut App, area: Rect) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(area.width, area.height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, area: Rect, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (area.x..area.right()).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn play(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_screen() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        let text = screen_text(&render(&mut app));
        assert!(text.contains("Timeline Tic-Tac-Toe"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(text.contains("Moves (Ascending)"));
    }

    #[test]
    fn test_moves_and_status_after_play() {
        let mut app = App::new(DisplayOrder::Descending, true);
        play(&mut app, "5");
        let text = screen_text(&render(&mut app));
        assert!(text.contains("Next player: O"));
        assert!(text.contains("You are at move #1 (1, 1)"));
        assert!(text.contains("Moves (Descending)"));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        play(&mut app, "14253");
        let terminal = render(&mut app);
        assert!(screen_text(&terminal).contains("Winner: X"));

        let cells = cell_areas(regions(AREA).board);
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(cells[0].x, cells[0].y)].bg, Color::Green);
        assert_eq!(buffer[(cells[1].x, cells[1].y)].bg, Color::Green);
        assert_ne!(buffer[(cells[4].x, cells[4].y)].bg, Color::Green);
    }

    #[test]
    fn test_highlight_can_be_disabled() {
        let mut app = App::new(DisplayOrder::Ascending, false);
        play(&mut app, "14253");
        let terminal = render(&mut app);
        let cells = cell_areas(regions(AREA).board);
        assert_ne!(terminal.backend().buffer()[(cells[0].x, cells[0].y)].bg, Color::Green);
    }

    #[test]
    fn test_hit_testing_matches_layout() {
        let cells = cell_areas(regions(AREA).board);
        let center = cells[4];
        assert_eq!(cell_at(AREA, center.x + 1, center.y + 1), Some(Position::Center));
        assert_eq!(cell_at(AREA, 0, 0), None);

        let moves = regions(AREA).moves;
        assert_eq!(move_row_at(AREA, moves.x + 2, moves.y + 1), Some(0));
        assert_eq!(move_row_at(AREA, moves.x + 2, moves.y + 3), Some(2));
        assert_eq!(move_row_at(AREA, moves.x, moves.y), None);
    }

    #[test]
    fn test_click_plays_and_jumps() {
        let mut app = App::new(DisplayOrder::Ascending, true);
        let cells = cell_areas(regions(AREA).board);
        app.click(AREA, cells[8].x, cells[8].y);
        assert_eq!(
            app.history().current_snapshot().placed(),
            Some(Position::BottomRight)
        );

        let moves = regions(AREA).moves;
        app.click(AREA, moves.x + 2, moves.y + 1);
        assert_eq!(app.history().current_move(), 0);
        assert_eq!(app.history().len(), 2);
    }

    #[test]
    fn test_click_on_scrolled_move_list() {
        let area = Rect::new(0, 0, 80, 10);
        let mut app = App::new(DisplayOrder::Ascending, true);
        play(&mut app, "123546879");
        assert_eq!(app.history().status(), Status::Draw);

        let terminal = render_in(&mut app, area);
        let offset = app.move_list().offset();
        assert!(offset > 0, "ten moves should not fit in a ten-row terminal");

        let inner = regions(area).moves.inner(Margin::new(1, 1));
        let top = row_text(&terminal, inner, inner.y);
        assert!(top.contains(&format!("Go to move #{offset} ")), "top row was {top:?}");

        app.click(area, inner.x + 2, inner.y);
        assert_eq!(app.history().current_move(), offset);
        assert_eq!(*app.selected_move(), offset);

        render_in(&mut app, area);
        app.click(area, inner.x + 2, inner.bottom() - 1);
        assert_eq!(
            app.history().current_move(),
            app.move_list().offset() + usize::from(inner.height) - 1
        );
    }
}
