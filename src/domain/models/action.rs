use super::ChatSession;
use super::Note;

pub struct ChatRequest {
    pub session: ChatSession,
    pub placeholder_id: String,
    pub text: String,
}

/// Work handed from the UI to the actions worker.
pub enum Action {
    /// Persist-ready note; the flag asks for a generated summary first.
    SaveNote(Note, bool),
    /// Draft id and the content to polish.
    PolishContent(String, String),
    SendChat(ChatRequest),
}
