#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use super::ChatMessage;

/// Ordered message log. At most one loading placeholder exists at any time,
/// and it is only ever removed by id.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new(messages: Vec<ChatMessage>) -> Transcript {
        let mut transcript = Transcript::default();
        for message in messages.into_iter().filter(|m| return !m.is_loading) {
            transcript.messages.push(message);
        }

        return transcript;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }

    pub fn pending(&self) -> Option<&ChatMessage> {
        return self.messages.iter().find(|m| return m.is_loading);
    }

    pub fn placeholder_count(&self) -> usize {
        return self.messages.iter().filter(|m| return m.is_loading).count();
    }

    pub fn append(&mut self, message: ChatMessage) -> Result<()> {
        if message.is_loading && self.pending().is_some() {
            bail!("A reply is already pending");
        }

        self.messages.push(message);
        return Ok(());
    }

    /// Appends a loading placeholder and returns its id.
    pub fn begin_placeholder(&mut self) -> Result<String> {
        let placeholder = ChatMessage::placeholder();
        let id = placeholder.id.to_string();
        self.append(placeholder)?;

        return Ok(id);
    }

    /// Drops the placeholder with `id` and appends `reply` at the end of the
    /// log. Returns false when no such placeholder was pending, in which case
    /// the reply is still appended.
    pub fn resolve_placeholder(&mut self, id: &str, reply: ChatMessage) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| return !(m.is_loading && m.id == id));
        let removed = self.messages.len() != before;

        self.messages.push(ChatMessage {
            is_loading: false,
            ..reply
        });

        return removed;
    }
}
