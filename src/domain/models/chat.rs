use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

fn create_id() -> String {
    return Uuid::new_v4().to_string();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    #[serde(skip)]
    pub is_loading: bool,
}

impl ChatMessage {
    pub fn new(role: Role, text: &str) -> ChatMessage {
        return ChatMessage {
            id: create_id(),
            role,
            text: text.replace('\t', "  "),
            is_loading: false,
        };
    }

    /// Stand-in for an assistant reply that has not arrived yet.
    pub fn placeholder() -> ChatMessage {
        return ChatMessage {
            id: format!("loading-{}", create_id()),
            role: Role::Assistant,
            text: "".to_string(),
            is_loading: true,
        };
    }
}

/// Handle on a multi-turn conversation. `history` is the serialized turn list
/// the backend replays to continue the conversation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSession {
    pub id: String,
    pub system_instruction: String,
    pub history: String,
}

impl ChatSession {
    pub fn new(system_instruction: &str) -> ChatSession {
        return ChatSession {
            id: create_id(),
            system_instruction: system_instruction.to_string(),
            history: "".to_string(),
        };
    }
}
