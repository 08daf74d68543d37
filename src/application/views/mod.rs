#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

mod brainstorm;
mod editor;
mod list;
mod reader;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Tabs;

use crate::domain::models::View;
use crate::domain::services::AppState;

pub const DATE_FORMAT: &str = "%b %-d, %Y";

fn nav_index(view: View) -> usize {
    return match view {
        View::List | View::Read => 0,
        View::Edit => 1,
        View::Brainstorm => 2,
    };
}

fn hints(app_state: &AppState) -> &'static str {
    if app_state.controller.pending_delete().is_some() {
        return "y confirm delete | n cancel";
    }

    return match app_state.view() {
        View::List if app_state.searching => "Type to filter | Enter/Esc done",
        View::List => "Up/Down move | Enter read | e edit | d delete | / search | ^C quit",
        View::Read => "Up/Down scroll | e edit | Esc back",
        View::Edit => "Tab next field | ^S save | ^P polish with AI | Esc cancel",
        View::Brainstorm => "Enter send | Up/Down scroll | Esc back",
    };
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn render_nav<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let count = app_state.controller.store().len();
    let titles = vec!["My Notes ^L", "Write ^N", "Brainstorm ^B"];

    frame.render_widget(
        Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" MindScape | {count} notes captured ")),
            )
            .select(nav_index(app_state.view()))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

pub fn render<B: Backend>(frame: &mut Frame<B>, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_nav(frame, layout[0], app_state);

    match app_state.view() {
        View::List => list::render(frame, layout[1], app_state),
        View::Read => reader::render(frame, layout[1], app_state),
        View::Edit => editor::render(frame, layout[1], app_state),
        View::Brainstorm => brainstorm::render(frame, layout[1], app_state),
    }

    frame.render_widget(
        Paragraph::new(hints(app_state)).style(Style::default().add_modifier(Modifier::DIM)),
        layout[2],
    );
}
