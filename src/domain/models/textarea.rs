use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    pub fn titled(title: &str) -> tui_textarea::TextArea<'a> {
        return TextArea::with_text(title, "");
    }

    pub fn with_text(title: &str, text: &str) -> tui_textarea::TextArea<'a> {
        let lines = text
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );

        return textarea;
    }

    /// Dims the border of fields that do not have focus.
    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, title: &str, focused: bool) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .padding(Padding::new(1, 1, 0, 0));

        if focused {
            block = block.border_type(BorderType::Double);
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            block = block.border_style(Style::default().add_modifier(Modifier::DIM));
            textarea.set_cursor_style(Style::default());
        }

        textarea.set_block(block);
    }

    pub fn text(textarea: &tui_textarea::TextArea<'a>) -> String {
        return textarea.lines().join("\n");
    }
}
