#[cfg(test)]
#[path = "brainstorm_test.rs"]
mod tests;

use anyhow::Result;

use super::AiGateway;
use crate::domain::models::ChatMessage;
use crate::domain::models::ChatReply;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatSession;
use crate::domain::models::Role;
use crate::domain::models::Transcript;

pub const GREETING: &str = "Hello! I'm your creative assistant. What specific topics or confusing concepts are you trying to untangle today?";

/// Chat with the brainstorming assistant. The session is opened on first
/// activation and kept for the lifetime of the surface.
pub struct BrainstormSurface {
    session: Option<ChatSession>,
    transcript: Transcript,
}

impl Default for BrainstormSurface {
    fn default() -> BrainstormSurface {
        return BrainstormSurface {
            session: None,
            transcript: Transcript::new(vec![ChatMessage::new(Role::Assistant, GREETING)]),
        };
    }
}

impl BrainstormSurface {
    pub fn activate(&mut self) -> &ChatSession {
        return self
            .session
            .get_or_insert_with(AiGateway::start_brainstorm_session);
    }

    pub fn session(&self) -> Option<&ChatSession> {
        return self.session.as_ref();
    }

    pub fn transcript(&self) -> &Transcript {
        return &self.transcript;
    }

    pub fn is_waiting(&self) -> bool {
        return self.transcript.pending().is_some();
    }

    /// Appends the user message and a loading placeholder. Returns `None`
    /// for blank input or while a reply is pending.
    pub fn begin_send(&mut self, text: &str) -> Result<Option<ChatRequest>> {
        if text.trim().is_empty() || self.is_waiting() {
            return Ok(None);
        }

        let session = self.activate().clone();
        self.transcript
            .append(ChatMessage::new(Role::User, text))?;
        let placeholder_id = self.transcript.begin_placeholder()?;

        return Ok(Some(ChatRequest {
            session,
            placeholder_id,
            text: text.to_string(),
        }));
    }

    /// Swaps the placeholder for the reply. Error sentinels are shown like
    /// any other reply.
    pub fn finish_send(&mut self, reply: ChatReply) {
        if let (Some(session), Some(context)) = (self.session.as_mut(), reply.context) {
            if session.id == reply.session_id {
                session.history = context;
            }
        }

        let text = reply.outcome.into_reply();
        self.transcript.resolve_placeholder(
            &reply.placeholder_id,
            ChatMessage::new(Role::Assistant, &text),
        );
    }

    /// Sends inline and waits for the reply. Returns whether anything was
    /// sent.
    pub async fn send(&mut self, gateway: &AiGateway, text: &str) -> Result<bool> {
        let request = match self.begin_send(text)? {
            Some(request) => request,
            None => return Ok(false),
        };

        let turn = gateway.send_message(&request.session, &request.text).await;
        self.finish_send(ChatReply {
            session_id: request.session.id,
            placeholder_id: request.placeholder_id,
            outcome: turn.outcome,
            context: turn.context,
        });

        return Ok(true);
    }
}
