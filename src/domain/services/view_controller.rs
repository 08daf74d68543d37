#[cfg(test)]
#[path = "view_controller_test.rs"]
mod tests;

use anyhow::Result;

use super::NoteStore;
use crate::domain::models::NavTarget;
use crate::domain::models::Note;
use crate::domain::models::View;
use crate::domain::models::ViewState;

/// Owns the note store and the navigation state. All user actions against
/// notes go through here.
pub struct ViewController {
    state: ViewState,
    search_query: String,
    pending_delete: Option<String>,
    store: NoteStore,
}

impl ViewController {
    pub fn new(store: NoteStore) -> ViewController {
        return ViewController {
            state: ViewState::default(),
            search_query: "".to_string(),
            pending_delete: None,
            store,
        };
    }

    pub fn state(&self) -> &ViewState {
        return &self.state;
    }

    pub fn view(&self) -> View {
        return self.state.view;
    }

    pub fn store(&self) -> &NoteStore {
        return &self.store;
    }

    pub fn search_query(&self) -> &str {
        return &self.search_query;
    }

    /// Notes shown in the list, narrowed by the search query.
    pub fn visible_notes(&self) -> Vec<&Note> {
        return self.store.search(&self.search_query);
    }

    pub fn current_note(&self) -> Option<&Note> {
        return self
            .state
            .selected
            .as_deref()
            .and_then(|id| return self.store.get(id));
    }

    fn transition(&mut self, view: View, selected: Option<String>) {
        tracing::debug!(from = %self.state.view, to = %view, selected = ?selected, "view");
        self.state = ViewState::new(view, selected);
    }

    /// Opens the reader. Unknown ids leave the state untouched.
    pub fn select_for_read(&mut self, id: &str) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }

        self.transition(View::Read, Some(id.to_string()));
        return true;
    }

    /// Opens the editor on an existing note, or on a new one for `None` and
    /// unknown ids.
    pub fn select_for_edit(&mut self, id: Option<&str>) {
        let selected = id
            .filter(|id| return self.store.get(id).is_some())
            .map(|id| return id.to_string());

        self.transition(View::Edit, selected);
    }

    /// Asks for a delete that only happens once confirmed.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.store.get(id).is_none() {
            return false;
        }

        self.pending_delete = Some(id.to_string());
        return true;
    }

    pub fn pending_delete(&self) -> Option<&Note> {
        return self
            .pending_delete
            .as_deref()
            .and_then(|id| return self.store.get(id));
    }

    /// Deletes the pending note when `confirmed`, otherwise drops the
    /// request. Returns whether a note was removed.
    pub async fn resolve_delete(&mut self, confirmed: bool) -> Result<bool> {
        let id = match self.pending_delete.take() {
            Some(id) => id,
            None => return Ok(false),
        };

        if !confirmed {
            return Ok(false);
        }

        let removed = self.store.delete(&id).await?;
        if self.state.is_selected(&id) {
            self.transition(View::List, None);
        }

        return Ok(removed);
    }

    pub async fn save(&mut self, note: Note) -> Result<()> {
        self.store.save(note).await?;
        self.transition(View::List, None);

        return Ok(());
    }

    pub fn cancel_edit(&mut self) {
        self.transition(View::List, None);
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        if self.state.view != View::List {
            self.transition(View::List, None);
        }
    }

    /// Switches sections and drops any unconfirmed delete.
    pub fn navigate(&mut self, target: NavTarget) {
        self.pending_delete = None;
        match target {
            NavTarget::Notes => self.transition(View::List, None),
            NavTarget::Write => self.transition(View::Edit, None),
            NavTarget::Brainstorm => self.transition(View::Brainstorm, None),
        }
    }
}
