#[cfg(test)]
#[path = "ai_gateway_test.rs"]
mod tests;

use crate::domain::models::AiOutcome;
use crate::domain::models::BackendBox;
use crate::domain::models::ChatSession;
use crate::domain::models::DegradedReason;

pub const BRAINSTORM_INSTRUCTION: &str = "You are a creative muse and editorial assistant for a personal blogger. Help them brainstorm topics, outline articles, and refine their ideas. Be encouraging, insightful, and ask thought-provoking questions.";

fn summary_prompt(text: &str) -> String {
    return format!("Please provide a concise, 2-sentence summary of the following blog post content. Capture the main insight or learning point:\n\n{text}");
}

fn polish_prompt(text: &str) -> String {
    return format!("Rewrite the following text to be more clear, concise, and professional, while maintaining the original meaning and tone. Return only the rewritten text:\n\n{text}");
}

pub struct ChatTurn {
    pub outcome: AiOutcome,
    /// Updated session history, only on success.
    pub context: Option<String>,
}

/// Best-effort access to the generative backend. Nothing here returns an
/// error: failures are logged and reported as `AiOutcome::Degraded`.
pub struct AiGateway {
    backend: BackendBox,
}

impl AiGateway {
    pub fn new(backend: BackendBox) -> AiGateway {
        return AiGateway { backend };
    }

    async fn generate(&self, operation: &str, prompt: String) -> AiOutcome {
        if !self.backend.has_credential() {
            tracing::warn!(operation = operation, "No AI token configured");
            return AiOutcome::Degraded(DegradedReason::MissingCredential);
        }

        return match self.backend.generate_text(&prompt).await {
            Ok(text) => AiOutcome::from_text(text),
            Err(err) => {
                tracing::error!(error = ?err, operation = operation, "AI request failed");
                AiOutcome::Degraded(DegradedReason::RemoteFailure(err.to_string()))
            }
        };
    }

    /// Two sentence summary of `text`.
    pub async fn summarize(&self, text: &str) -> AiOutcome {
        return self.generate("summarize", summary_prompt(text)).await;
    }

    /// Clearer rewrite of `text`, same meaning and tone.
    pub async fn polish(&self, text: &str) -> AiOutcome {
        return self.generate("polish", polish_prompt(text)).await;
    }

    pub fn start_brainstorm_session() -> ChatSession {
        return ChatSession::new(BRAINSTORM_INSTRUCTION);
    }

    /// Sends one turn. A failed turn leaves the session usable as it was.
    pub async fn send_message(&self, session: &ChatSession, text: &str) -> ChatTurn {
        if !self.backend.has_credential() {
            tracing::warn!(operation = "chat", "No AI token configured");
            return ChatTurn {
                outcome: AiOutcome::Degraded(DegradedReason::MissingCredential),
                context: None,
            };
        }

        return match self.backend.send_turn(session, text).await {
            Ok(res) => {
                let outcome = if res.text.is_empty() {
                    AiOutcome::Degraded(DegradedReason::EmptyResponse)
                } else {
                    AiOutcome::Generated(res.text)
                };

                ChatTurn {
                    outcome,
                    context: Some(res.context),
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, session_id = %session.id, "Chat turn failed");
                ChatTurn {
                    outcome: AiOutcome::Degraded(DegradedReason::RemoteFailure(err.to_string())),
                    context: None,
                }
            }
        };
    }
}
