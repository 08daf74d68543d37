use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;

use super::DATE_FORMAT;
use crate::domain::models::wrap_text;
use crate::domain::models::Note;
use crate::domain::services::AppState;

fn note_lines<'a>(note: &Note, width: usize) -> Vec<Line<'a>> {
    let mut meta = note.created_date(DATE_FORMAT);
    if !note.tags.is_empty() {
        meta = format!("{meta}  #{}", note.tags.join(" #"));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            note.title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            meta,
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ];

    if let Some(summary) = note.summary.as_ref().filter(|summary| return !summary.is_empty()) {
        lines.push(Line::from(Span::styled(
            "AI Summary",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for line in wrap_text(summary, width) {
            lines.push(Line::from(Span::styled(
                line,
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    for line in wrap_text(&note.content, width) {
        lines.push(Line::from(line));
    }

    return lines;
}

pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(1, 1, 0, 0));

    let note = match app_state.controller.current_note() {
        Some(note) => note,
        None => {
            frame.render_widget(Paragraph::new("Note not found.").block(block), rect);
            return;
        }
    };

    // Borders and padding.
    let width = rect.width.saturating_sub(4) as usize;
    let lines = note_lines(note, width);

    app_state
        .reader_scroll
        .set_lengths(lines.len() as u16, rect.height.saturating_sub(2));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .scroll((app_state.reader_scroll.position(), 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.reader_scroll.scrollbar_state(),
    );
}
