use anyhow::Result;
use async_trait::async_trait;

use super::ChatSession;

pub struct BackendResponse {
    pub text: String,
    /// Serialized conversation including this turn, to be stored on the
    /// session for the next one.
    pub context: String,
}

#[async_trait]
pub trait Backend {
    /// Checked before every request so a missing token never reaches the
    /// network.
    fn has_credential(&self) -> bool;

    /// Single-shot text generation used for summaries and rewrites.
    async fn generate_text(&self, prompt: &str) -> Result<String>;

    /// Sends one user turn on top of the session's history. The session is
    /// not modified, the updated history is returned in the response.
    async fn send_turn(&self, session: &ChatSession, text: &str) -> Result<BackendResponse>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
