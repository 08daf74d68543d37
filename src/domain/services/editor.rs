#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;

use super::AiGateway;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::excerpt;
use crate::domain::models::now_millis;
use crate::domain::models::parse_tags;
use crate::domain::models::Note;

/// When a saved note gets an excerpt or a generated summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryPolicy {
    /// Content must be longer than this many characters to be summarized.
    pub min_content_length: usize,
    pub excerpt_length: usize,
}

impl Default for SummaryPolicy {
    fn default() -> SummaryPolicy {
        return SummaryPolicy {
            min_content_length: 50,
            excerpt_length: 150,
        };
    }
}

impl SummaryPolicy {
    pub fn from_config() -> SummaryPolicy {
        return SummaryPolicy {
            min_content_length: Config::get_usize(ConfigKey::SummaryMinLength),
            excerpt_length: Config::get_usize(ConfigKey::SummaryExcerptLength),
        };
    }
}

/// Replaces the excerpt summary with a generated one when asked to.
pub async fn complete_note(mut note: Note, summarize: bool, gateway: &AiGateway) -> Note {
    if summarize {
        note.summary = Some(gateway.summarize(&note.content).await.into_summary());
    }

    return note;
}

/// Draft state of the note being written.
pub struct EditorSurface {
    draft_id: String,
    original: Option<Note>,
    policy: SummaryPolicy,
    pub title: String,
    pub content: String,
    pub tags_text: String,
    generating: bool,
    polishing: bool,
}

impl EditorSurface {
    pub fn new(note: Option<&Note>, policy: SummaryPolicy) -> EditorSurface {
        let mut editor = EditorSurface {
            draft_id: Note::create_id(),
            original: note.cloned(),
            policy,
            title: "".to_string(),
            content: "".to_string(),
            tags_text: "".to_string(),
            generating: false,
            polishing: false,
        };

        if let Some(note) = note {
            editor.title = note.title.to_string();
            editor.content = note.content.to_string();
            editor.tags_text = note.tags.join(", ");
        }

        return editor;
    }

    /// Id of the note being edited, `None` for a new one.
    pub fn note_id(&self) -> Option<&str> {
        return self.original.as_ref().map(|note| return note.id.as_str());
    }

    /// Identifies this editing session. Every opened editor gets a new one.
    pub fn draft_id(&self) -> &str {
        return &self.draft_id;
    }

    pub fn is_generating(&self) -> bool {
        return self.generating;
    }

    pub fn is_polishing(&self) -> bool {
        return self.polishing;
    }

    pub fn can_save(&self) -> bool {
        return !self.generating && !self.title.is_empty();
    }

    pub fn can_polish(&self) -> bool {
        return !self.polishing && !self.content.is_empty();
    }

    fn prior_summary(&self) -> Option<String> {
        return self
            .original
            .as_ref()
            .and_then(|note| return note.summary.clone())
            .filter(|summary| return !summary.is_empty());
    }

    /// True when saving has to wait for a generated summary.
    pub fn needs_summary(&self) -> bool {
        return self.prior_summary().is_none()
            && self.content.chars().count() > self.policy.min_content_length;
    }

    /// Note as it would be saved at `now`, with the excerpt fallback summary.
    pub fn build_note(&self, now: i64) -> Note {
        let (id, created_at) = match &self.original {
            Some(note) => (note.id.to_string(), note.created_at),
            None => (Note::create_id(), now),
        };

        let summary = self
            .prior_summary()
            .unwrap_or_else(|| return excerpt(&self.content, self.policy.excerpt_length));

        return Note {
            id,
            title: self.title.to_string(),
            content: self.content.to_string(),
            summary: Some(summary),
            tags: parse_tags(&self.tags_text),
            created_at,
            updated_at: now.max(created_at),
        };
    }

    /// Starts a save. Returns the candidate note and whether it still needs a
    /// generated summary, or `None` while saving is disabled.
    pub fn begin_save(&mut self) -> Option<(Note, bool)> {
        if !self.can_save() {
            return None;
        }

        let summarize = self.needs_summary();
        self.generating = summarize;

        return Some((self.build_note(now_millis()), summarize));
    }

    pub fn finish_save(&mut self) {
        self.generating = false;
    }

    /// Saves inline, waiting for the summary when one is needed.
    pub async fn save(&mut self, gateway: &AiGateway) -> Option<Note> {
        let (note, summarize) = self.begin_save()?;
        let note = complete_note(note, summarize, gateway).await;
        self.finish_save();

        return Some(note);
    }

    /// Returns the content to polish, or `None` while polishing is disabled.
    pub fn begin_polish(&mut self) -> Option<String> {
        if !self.can_polish() {
            return None;
        }

        self.polishing = true;
        return Some(self.content.to_string());
    }

    pub fn finish_polish(&mut self, content: String) {
        self.polishing = false;
        self.content = content;
    }

    pub async fn polish(&mut self, gateway: &AiGateway) {
        if let Some(content) = self.begin_polish() {
            let polished = gateway.polish(&content).await.into_polished(&content);
            self.finish_polish(polished);
        }
    }
}
