use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;

use crate::domain::models::Loading;
use crate::domain::services::AppState;

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let editor = match app_state.editor.as_ref() {
        Some(editor) => editor,
        None => return,
    };

    if editor.is_generating() {
        Loading::new("Generating summary and saving...").render(frame, rect);
        return;
    }
    if editor.is_polishing() {
        Loading::new("Polishing with AI...").render(frame, rect);
        return;
    }

    let mut heading = "New note".to_string();
    if editor.note_id().is_some() {
        heading = "Editing note".to_string();
    }
    if editor.needs_summary() {
        heading = format!("{heading} | a summary will be generated on save");
    }

    frame.render_widget(
        Paragraph::new(heading).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        rect,
    );
}

pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(rect);

    render_status(frame, layout[0], app_state);
    frame.render_widget(app_state.form.title.widget(), layout[1]);
    frame.render_widget(app_state.form.tags.widget(), layout[2]);
    frame.render_widget(app_state.form.content.widget(), layout[3]);
}
