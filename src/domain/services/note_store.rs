#[cfg(test)]
#[path = "note_store_test.rs"]
mod tests;

use anyhow::Result;

use super::LocalStorage;
use crate::domain::models::now_millis;
use crate::domain::models::Note;

pub const STORAGE_KEY: &str = "mindscape_posts";

/// Ordered note collection, newest first. Every mutation rewrites the whole
/// collection under `STORAGE_KEY`.
pub struct NoteStore {
    storage: LocalStorage,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Restores the collection. Missing or unreadable JSON falls back to the
    /// welcome note; nothing is written until the first mutation.
    pub async fn load(storage: LocalStorage) -> Result<NoteStore> {
        let mut notes: Vec<Note> = vec![];
        let mut restored = false;

        match storage.get(STORAGE_KEY).await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(stored) => {
                    notes = stored;
                    restored = true;
                }
                Err(err) => {
                    tracing::error!(error = ?err, "Failed to parse stored notes");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = ?err, "Failed to read stored notes");
            }
        }

        if !restored {
            notes = vec![Note::welcome(now_millis())];
        }

        tracing::debug!(count = notes.len(), restored = restored, "notes loaded");
        return Ok(NoteStore { storage, notes });
    }

    pub fn notes(&self) -> &[Note] {
        return &self.notes;
    }

    pub fn len(&self) -> usize {
        return self.notes.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.notes.is_empty();
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        return self.notes.iter().find(|note| return note.id == id);
    }

    /// Replaces the note with the same id in place, or prepends a new one.
    pub async fn save(&mut self, note: Note) -> Result<()> {
        if let Some(idx) = self.notes.iter().position(|e| return e.id == note.id) {
            self.notes[idx] = note;
        } else {
            self.notes.insert(0, note);
        }

        return self.persist().await;
    }

    /// Returns whether a note was removed. Unknown ids are not an error.
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| return note.id != id);
        let removed = self.notes.len() != before;

        self.persist().await?;
        return Ok(removed);
    }

    /// Notes whose title or any tag contains `query`, ignoring case, in
    /// collection order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.is_empty() {
            return self.notes.iter().collect();
        }

        let lowered = query.to_lowercase();
        return self
            .notes
            .iter()
            .filter(|note| return note.matches(&lowered))
            .collect();
    }

    async fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.storage.set(STORAGE_KEY, &payload).await?;

        tracing::debug!(count = self.notes.len(), "notes persisted");
        return Ok(());
    }
}
