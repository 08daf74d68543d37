use std::sync::Arc;
use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Backend;
use crate::domain::models::BackendResponse;
use crate::domain::models::ChatSession;

/// Scripted backend that records every prompt it receives.
pub struct MockBackend {
    credential: bool,
    reply: Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn replying(text: &str) -> MockBackend {
        return MockBackend {
            credential: true,
            reply: Ok(text.to_string()),
            prompts: Arc::new(Mutex::new(vec![])),
        };
    }

    pub fn failing(err: &str) -> MockBackend {
        return MockBackend {
            reply: Err(err.to_string()),
            ..MockBackend::replying("")
        };
    }

    pub fn without_credential() -> MockBackend {
        return MockBackend {
            credential: false,
            ..MockBackend::replying("unreachable")
        };
    }

    /// Shared view on the received prompts, usable after the backend is boxed.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        return self.prompts.clone();
    }

    fn record(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        return match &self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(err) => bail!(err.to_string()),
        };
    }
}

#[async_trait]
impl Backend for MockBackend {
    fn has_credential(&self) -> bool {
        return self.credential;
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        return self.record(prompt);
    }

    async fn send_turn(&self, session: &ChatSession, text: &str) -> Result<BackendResponse> {
        let reply = self.record(text)?;
        return Ok(BackendResponse {
            context: format!("{}[{text}|{reply}]", session.history),
            text: reply,
        });
    }
}
