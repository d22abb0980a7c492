//! Stateless UI rendering for noughts & crosses.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use std::fmt::Write;

use crate::app::App;
use crate::config::Palette;
use noughts_crosses::{Position, SIZE, Token};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
}

/// Maps a terminal coordinate to the board cell drawn there.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Position> {
    let cells = cell_areas(screen_layout(area)[1]);
    Position::ALL.into_iter().find(|pos| {
        let rect = cells[pos.row()][pos.column()];
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}

fn screen_layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(4),            // Status
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn cell_areas(area: Rect) -> [[Rect; SIZE]; SIZE] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    std::array::from_fn(|row| {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        std::array::from_fn(|column| cols[column * 2])
    })
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let cells = cell_areas(area);
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    // Grid lines first, cells paint over them.
    for row in 0..SIZE - 1 {
        let y = cells[row][0].y + CELL_HEIGHT;
        draw_separator(frame, Rect::new(board_area.x, y, board_area.width, 1));
    }
    for row in &cells {
        for column in 0..SIZE - 1 {
            let x = row[column].x + CELL_WIDTH;
            draw_separator_vertical(frame, Rect::new(x, row[column].y, 1, CELL_HEIGHT));
        }
    }

    for pos in Position::ALL {
        draw_cell(frame, cells[pos.row()][pos.column()], app, pos);
    }
}

fn token_color(palette: &Palette, token: Token) -> Color {
    match token {
        Token::Cross => *palette.cross(),
        Token::Nought => *palette.nought(),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let view = app.view();
    let palette = app.palette();
    let is_cursor = pos == app.cursor();

    let (symbol, mut style) = match view.token_at(pos) {
        Some(token) if view.is_highlighted(pos) => (
            token.to_string(),
            Style::default()
                .fg(Color::White)
                .bg(token_color(palette, token))
                .add_modifier(Modifier::BOLD),
        ),
        Some(token) => (
            token.to_string(),
            Style::default()
                .fg(token_color(palette, token))
                .add_modifier(Modifier::BOLD),
        ),
        None => match app.preview().filter(|_| is_cursor) {
            Some(token) => (token.to_string(), Style::default().fg(*palette.preview())),
            None => (
                format!("{}", pos.to_index() + 1),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.view();
    let mut hints = String::from("arrows/1-9 move · enter place · r reset");
    if *view.toggle_enabled() {
        let _ = write!(hints, " · s starter ({})", app.session().current_turn());
    }
    hints.push_str(" · q quit");

    let status = Paragraph::new(vec![
        Line::from(Span::styled(
            view.banner().text(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
