use tui_textarea::Input;

use super::AiOutcome;
use super::Note;

pub struct ChatReply {
    pub session_id: String,
    pub placeholder_id: String,
    pub outcome: AiOutcome,
    /// Present only when the turn succeeded.
    pub context: Option<String>,
}

pub enum Event {
    ChatReplied(ChatReply),
    KeyboardCTRLC(),
    KeyboardInput(Input),
    NoteReady(Note),
    /// Draft id and the polished content.
    PolishReady(String, String),
    UIResize(),
    UITick(),
}
