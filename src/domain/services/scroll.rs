#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: u16 = 10;

/// Vertical offset into content taller than its viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    position: u16,
}

impl Scroll {
    pub fn position(&self) -> u16 {
        return self.position;
    }

    fn max_position(&self) -> u16 {
        return self.content_length.saturating_sub(self.viewport_length);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn up_page(&mut self) {
        self.position = self.position.saturating_sub(PAGE_SIZE);
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
    }

    pub fn down_page(&mut self) {
        self.position = self
            .position
            .saturating_add(PAGE_SIZE)
            .min(self.max_position());
    }

    pub fn first(&mut self) {
        self.position = 0;
    }

    pub fn last(&mut self) {
        self.position = self.max_position();
    }

    /// Records the latest rendered sizes, keeping the offset in bounds.
    pub fn set_lengths(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
    }

    pub fn scrollbar_state(&self) -> ScrollbarState {
        return ScrollbarState::default()
            .content_length(self.max_position())
            .viewport_content_length(self.viewport_length)
            .position(self.position);
    }
}
