#[cfg(test)]
#[path = "note_test.rs"]
mod tests;

use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use uuid::Uuid;

pub const WELCOME_NOTE_ID: &str = "1";
pub const WELCOME_NOTE_TITLE: &str = "Welcome to MindScape";

/// Milliseconds since the Unix epoch, the unit every note timestamp uses.
pub fn now_millis() -> i64 {
    return Utc::now().timestamp_millis();
}

/// Splits a comma separated tag string. Entries are trimmed and empty ones
/// dropped, order and duplicates are kept.
pub fn parse_tags(text: &str) -> Vec<String> {
    return text
        .split(',')
        .map(|tag| return tag.trim().to_string())
        .filter(|tag| return !tag.is_empty())
        .collect();
}

/// First `max_chars` characters of `content` followed by a truncation marker.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    let head = content.chars().take(max_chars).collect::<String>();
    return format!("{head}...");
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn create_id() -> String {
        return Uuid::new_v4().to_string();
    }

    /// The note a fresh notebook starts with.
    pub fn welcome(now: i64) -> Note {
        return Note {
            id: WELCOME_NOTE_ID.to_string(),
            title: WELCOME_NOTE_TITLE.to_string(),
            content: "This is your personal space to think, write, and learn. Click the \"Edit\" button or \"Write\" in the sidebar to start documenting your journey.".to_string(),
            summary: Some(
                "A brief welcome note introducing the purpose of this application.".to_string(),
            ),
            tags: vec!["Welcome".to_string(), "Guide".to_string()],
            created_at: now,
            updated_at: now,
        };
    }

    /// Case-insensitive substring match on the title or any tag. The query
    /// must already be lowercased.
    pub fn matches(&self, lowered_query: &str) -> bool {
        if self.title.to_lowercase().contains(lowered_query) {
            return true;
        }

        return self
            .tags
            .iter()
            .any(|tag| return tag.to_lowercase().contains(lowered_query));
    }

    /// Text shown under the title in the notes list.
    pub fn preview(&self) -> &str {
        if let Some(summary) = &self.summary {
            if !summary.is_empty() {
                return summary;
            }
        }

        return &self.content;
    }

    pub fn created_date(&self, format: &str) -> String {
        return match Local.timestamp_millis_opt(self.created_at).single() {
            Some(date) => date.format(format).to_string(),
            None => "".to_string(),
        };
    }
}
