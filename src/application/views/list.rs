use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use super::centered_rect;
use super::DATE_FORMAT;
use crate::domain::models::Note;
use crate::domain::services::AppState;

/// Single line preview, clipped to `width` characters.
fn clip(text: &str, width: usize) -> String {
    let line = text.split_whitespace().collect::<Vec<&str>>().join(" ");
    if line.chars().count() <= width {
        return line;
    }

    let head = line.chars().take(width.saturating_sub(3)).collect::<String>();
    return format!("{head}...");
}

fn note_item<'a>(note: &Note, width: usize) -> ListItem<'a> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                note.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", note.created_date(DATE_FORMAT)),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(clip(note.preview(), width)),
    ];

    if !note.tags.is_empty() {
        let tags = note
            .tags
            .iter()
            .map(|tag| return format!("#{tag}"))
            .collect::<Vec<String>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            tags,
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));

    return ListItem::new(lines);
}

fn render_empty<B: Backend>(frame: &mut Frame<B>, rect: Rect, query: &str) {
    let mut text = "No notes yet. Press Ctrl+N to write your first thought.".to_string();
    if !query.is_empty() {
        text = format!("No notes match \"{query}\".");
    }

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

fn render_confirm<B: Backend>(frame: &mut Frame<B>, area: Rect, note: &Note) {
    let rect = centered_rect(50, 5, area);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(format!("Delete \"{}\"? (y/n)", note.title))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Delete note"),
            ),
        rect,
    );
}

pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let query = app_state.controller.search_query().to_string();
    let mut list_rect = rect;

    if app_state.searching || !query.is_empty() {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
            .split(rect);

        frame.render_widget(app_state.search_input.widget(), layout[0]);
        list_rect = layout[1];
    }

    let notes = app_state.controller.visible_notes();
    if notes.is_empty() {
        render_empty(frame, list_rect, &query);
        return;
    }

    let width = list_rect.width.saturating_sub(4) as usize;
    let items = notes
        .iter()
        .map(|note| return note_item(note, width))
        .collect::<Vec<ListItem>>();

    let mut state = ListState::default();
    state.select(Some(app_state.cursor));

    frame.render_stateful_widget(
        List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Notes"))
            .highlight_symbol("> ")
            .highlight_style(Style::default().fg(Color::Cyan)),
        list_rect,
        &mut state,
    );

    if let Some(note) = app_state.controller.pending_delete() {
        render_confirm(frame, rect, note);
    }
}
