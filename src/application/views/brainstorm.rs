use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;

use crate::domain::models::wrap_text;
use crate::domain::models::ChatMessage;
use crate::domain::models::Loading;
use crate::domain::models::Role;
use crate::domain::services::AppState;

fn message_lines<'a>(message: &ChatMessage, width: usize) -> Vec<Line<'a>> {
    let (name, color) = match message.role {
        Role::User => ("You", Color::Green),
        Role::Assistant => ("Muse", Color::Magenta),
    };

    let mut lines = vec![Line::from(Span::styled(
        name,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];

    if message.is_loading {
        lines.push(Line::from(Span::styled(
            "...",
            Style::default().add_modifier(Modifier::DIM),
        )));
    } else {
        for line in wrap_text(&message.text, width) {
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::from(""));

    return lines;
}

pub fn render<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Length(3)])
        .split(rect);

    let width = layout[0].width.saturating_sub(4) as usize;
    let lines = app_state
        .brainstorm
        .transcript()
        .messages()
        .iter()
        .flat_map(|message| return message_lines(message, width))
        .collect::<Vec<Line>>();

    app_state
        .chat_scroll
        .set_lengths(lines.len() as u16, layout[0].height.saturating_sub(2));

    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Brainstorm")
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .scroll((app_state.chat_scroll.position(), 0)),
        layout[0],
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        layout[0].inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.chat_scroll.scrollbar_state(),
    );

    if app_state.brainstorm.is_waiting() {
        Loading::default().render(frame, layout[1]);
    } else {
        frame.render_widget(app_state.chat_input.widget(), layout[1]);
    }
}
