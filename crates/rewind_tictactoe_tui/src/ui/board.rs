//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Cell, Player, Position, WinningLine};

use crate::app::{App, Focus};

/// Renders the board at the current history index.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let border_style = match app.focus() {
        Focus::Board => Style::default().fg(Color::Cyan),
        Focus::Moves => Style::default().fg(Color::DarkGray),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let winning_line = app.game().winning_line();
    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, chunk, app, winning_line, row);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, winning_line: Option<WinningLine>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            render_cell(f, chunk, app, winning_line, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, winning_line: Option<WinningLine>, pos: Position) {
    let (text, mut style) = match app.game().current_board().get(pos) {
        Cell::Empty => (
            format!("{}", pos.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winning_line.is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in its 3-line slot.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
