#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::BackendResponse;
use crate::domain::models::ChatSession;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: &str, text: &str) -> Content {
        return Content {
            role: role.to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        };
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, empty when there is none.
    fn text(&self) -> String {
        return self
            .candidates
            .first()
            .and_then(|candidate| return candidate.content.as_ref())
            .map(|content| {
                return content
                    .parts
                    .iter()
                    .map(|part| return part.text.as_str())
                    .collect::<Vec<&str>>()
                    .join("");
            })
            .unwrap_or_default();
    }
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini {
            url: Config::get(ConfigKey::GeminiURL),
            token: Config::get(ConfigKey::GeminiToken),
            model: Config::get(ConfigKey::Model),
        };
    }
}

impl Gemini {
    fn endpoint(&self) -> String {
        return format!(
            "{url}/v1beta/models/{model}:generateContent?key={key}",
            url = self.url.trim_end_matches('/'),
            model = self.model.trim_start_matches("models/"),
            key = self.token,
        );
    }

    async fn generate(&self, req: &GenerateContentRequest) -> Result<String> {
        let res = reqwest::Client::new()
            .post(self.endpoint())
            .json(req)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                "Failed to make completion request to Gemini"
            );
            bail!(format!(
                "Failed to make completion request to Gemini, {}",
                res.status().as_u16()
            ));
        }

        let body = res.json::<GenerateContentResponse>().await?;
        return Ok(body.text());
    }
}

#[async_trait]
impl Backend for Gemini {
    fn has_credential(&self) -> bool {
        return !self.token.is_empty() && !self.url.is_empty();
    }

    #[allow(clippy::implicit_return)]
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let req = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::text("user", prompt)],
        };

        return self.generate(&req).await;
    }

    #[allow(clippy::implicit_return)]
    async fn send_turn(&self, session: &ChatSession, text: &str) -> Result<BackendResponse> {
        let mut contents: Vec<Content> = vec![];
        if !session.history.is_empty() {
            contents = serde_json::from_str(&session.history)?;
        }
        contents.push(Content::text("user", text));

        let mut system_instruction = None;
        if !session.system_instruction.is_empty() {
            system_instruction = Some(SystemInstruction {
                parts: vec![Part {
                    text: session.system_instruction.to_string(),
                }],
            });
        }

        let req = GenerateContentRequest {
            system_instruction,
            contents,
        };
        let reply = self.generate(&req).await?;

        // Gemini rejects histories holding empty parts.
        if reply.is_empty() {
            return Ok(BackendResponse {
                text: reply,
                context: session.history.to_string(),
            });
        }

        let mut contents = req.contents;
        contents.push(Content::text("model", &reply));

        return Ok(BackendResponse {
            text: reply,
            context: serde_json::to_string(&contents)?,
        });
    }
}
