#[cfg(test)]
#[path = "outcome_test.rs"]
mod tests;

pub const MISSING_CREDENTIAL_TEXT: &str = "API Key missing.";
pub const SUMMARY_ERROR_TEXT: &str = "Error generating summary.";
pub const SUMMARY_EMPTY_TEXT: &str = "Could not generate summary.";
pub const CHAT_ERROR_TEXT: &str = "Sorry, I encountered an error connecting to the AI.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DegradedReason {
    /// No token configured, nothing was sent.
    MissingCredential,
    /// Network, quota or malformed response error.
    RemoteFailure(String),
    /// The backend answered without any text.
    EmptyResponse,
}

/// Result of a best-effort AI call. Callers pick the fallback text that fits
/// their operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AiOutcome {
    Generated(String),
    Degraded(DegradedReason),
}

impl AiOutcome {
    pub fn from_text(text: String) -> AiOutcome {
        if text.is_empty() {
            return AiOutcome::Degraded(DegradedReason::EmptyResponse);
        }

        return AiOutcome::Generated(text);
    }

    pub fn is_generated(&self) -> bool {
        return matches!(self, AiOutcome::Generated(_));
    }

    pub fn into_summary(self) -> String {
        return match self {
            AiOutcome::Generated(text) => text,
            AiOutcome::Degraded(DegradedReason::MissingCredential) => {
                MISSING_CREDENTIAL_TEXT.to_string()
            }
            AiOutcome::Degraded(DegradedReason::RemoteFailure(_)) => {
                SUMMARY_ERROR_TEXT.to_string()
            }
            AiOutcome::Degraded(DegradedReason::EmptyResponse) => SUMMARY_EMPTY_TEXT.to_string(),
        };
    }

    /// Never loses the draft: anything but generated text yields `original`.
    pub fn into_polished(self, original: &str) -> String {
        return match self {
            AiOutcome::Generated(text) => text,
            AiOutcome::Degraded(_) => original.to_string(),
        };
    }

    pub fn into_reply(self) -> String {
        return match self {
            AiOutcome::Generated(text) => text,
            AiOutcome::Degraded(DegradedReason::MissingCredential) => {
                MISSING_CREDENTIAL_TEXT.to_string()
            }
            AiOutcome::Degraded(DegradedReason::RemoteFailure(_)) => CHAT_ERROR_TEXT.to_string(),
            AiOutcome::Degraded(DegradedReason::EmptyResponse) => "".to_string(),
        };
    }
}
