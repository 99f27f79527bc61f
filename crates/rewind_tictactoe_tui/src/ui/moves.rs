//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Focus};

/// Entry the list keeps in view: the selection while the list has focus,
/// otherwise the displayed snapshot.
pub fn visible_move(app: &App) -> usize {
    match app.focus() {
        Focus::Moves => app.selected_move(),
        Focus::Board => app.game().current_move(),
    }
}

/// Renders one jump entry per history snapshot.
///
/// The displayed snapshot is bold; the `> ` marker only shows while the
/// list has focus.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .game()
        .moves()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default().fg(Color::DarkGray),
    };
    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Moves"),
    );
    if app.focus() == Focus::Moves {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
    }

    // Selecting scrolls the list so the entry stays on screen.
    let mut state = ListState::default();
    state.select(Some(visible_move(app)));
    f.render_stateful_widget(list, area, &mut state);
}
