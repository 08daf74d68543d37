#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use super::BrainstormSurface;
use super::EditorSurface;
use super::Scroll;
use super::SummaryPolicy;
use super::ViewController;
use crate::domain::models::Action;
use crate::domain::models::EditorForm;
use crate::domain::models::Event;
use crate::domain::models::NavTarget;
use crate::domain::models::TextArea;
use crate::domain::models::View;

pub const CHAT_INPUT_TITLE: &str = "Ask for ideas, outlines, or feedback...";
pub const SEARCH_INPUT_TITLE: &str = "Search notes";

/// Everything the UI loop renders and mutates between frames.
pub struct AppState<'a> {
    pub controller: ViewController,
    pub editor: Option<EditorSurface>,
    pub form: EditorForm<'a>,
    pub brainstorm: BrainstormSurface,
    pub chat_input: tui_textarea::TextArea<'a>,
    pub search_input: tui_textarea::TextArea<'a>,
    pub searching: bool,
    pub cursor: usize,
    pub reader_scroll: Scroll,
    pub chat_scroll: Scroll,
    policy: SummaryPolicy,
}

impl<'a> AppState<'a> {
    pub fn new(controller: ViewController, policy: SummaryPolicy) -> AppState<'a> {
        let search_input = TextArea::with_text(SEARCH_INPUT_TITLE, controller.search_query());

        return AppState {
            controller,
            editor: None,
            form: EditorForm::default(),
            brainstorm: BrainstormSurface::default(),
            chat_input: TextArea::titled(CHAT_INPUT_TITLE),
            search_input,
            searching: false,
            cursor: 0,
            reader_scroll: Scroll::default(),
            chat_scroll: Scroll::default(),
            policy,
        };
    }

    pub fn view(&self) -> View {
        return self.controller.view();
    }

    /// Id of the note under the list cursor.
    pub fn cursor_note_id(&self) -> Option<String> {
        return self
            .controller
            .visible_notes()
            .get(self.cursor)
            .map(|note| return note.id.to_string());
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.controller.visible_notes().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    fn clamp_cursor(&mut self) {
        let last = self.controller.visible_notes().len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }

    pub fn read_selected(&mut self) -> bool {
        let opened = match self.cursor_note_id() {
            Some(id) => self.controller.select_for_read(&id),
            None => false,
        };

        if opened {
            self.reader_scroll.first();
        }
        return opened;
    }

    /// Opens the editor on `id`, or on a blank note.
    pub fn edit(&mut self, id: Option<&str>) {
        self.controller.select_for_edit(id);
        self.open_editor();
    }

    fn open_editor(&mut self) {
        let editor = EditorSurface::new(self.controller.current_note(), self.policy);
        self.form = EditorForm::new(&editor.title, &editor.tags_text, &editor.content);
        self.editor = Some(editor);
    }

    pub fn navigate(&mut self, target: NavTarget) {
        self.searching = false;
        self.editor = None;
        self.controller.navigate(target);

        match target {
            NavTarget::Write => {
                self.open_editor();
            }
            NavTarget::Brainstorm => {
                self.brainstorm.activate();
                self.chat_scroll.last();
            }
            NavTarget::Notes => {}
        }
    }

    pub fn cancel_edit(&mut self) {
        self.controller.cancel_edit();
        self.editor = None;
    }

    fn sync_form(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            let (title, tags_text, content) = self.form.values();
            editor.title = title;
            editor.tags_text = tags_text;
            editor.content = content;
        }
    }

    /// Queues the draft for saving. Returns false while saving is disabled.
    pub fn save(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        self.sync_form();

        let begun = self.editor.as_mut().and_then(|editor| return editor.begin_save());
        if let Some((note, summarize)) = begun {
            tx.send(Action::SaveNote(note, summarize))?;
            return Ok(true);
        }

        return Ok(false);
    }

    pub fn polish(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        self.sync_form();

        let begun = self.editor.as_mut().and_then(|editor| {
            let content = editor.begin_polish()?;
            return Some((editor.draft_id().to_string(), content));
        });
        if let Some((draft_id, content)) = begun {
            tx.send(Action::PolishContent(draft_id, content))?;
            return Ok(true);
        }

        return Ok(false);
    }

    pub fn send_chat(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        let text = TextArea::text(&self.chat_input);
        let request = match self.brainstorm.begin_send(&text)? {
            Some(request) => request,
            None => return Ok(false),
        };

        tx.send(Action::SendChat(request))?;
        self.chat_input = TextArea::titled(CHAT_INPUT_TITLE);
        self.chat_scroll.last();

        return Ok(true);
    }

    pub fn set_search(&mut self, query: &str) {
        self.controller.set_search(query);
        self.cursor = 0;
    }

    pub fn request_delete_selected(&mut self) -> bool {
        return match self.cursor_note_id() {
            Some(id) => self.controller.request_delete(&id),
            None => false,
        };
    }

    pub async fn resolve_delete(&mut self, confirmed: bool) -> Result<bool> {
        let removed = self.controller.resolve_delete(confirmed).await?;
        self.clamp_cursor();

        return Ok(removed);
    }

    /// Applies results coming back from the actions worker.
    pub async fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::NoteReady(note) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.finish_save();
                }
                self.controller.save(note).await?;
                self.editor = None;
                self.cursor = 0;
            }
            Event::PolishReady(draft_id, content) => {
                // Results for a closed or replaced editor are dropped.
                if let Some(editor) = self.editor.as_mut() {
                    if editor.draft_id() == draft_id && editor.is_polishing() {
                        editor.finish_polish(content.to_string());
                        self.form.set_content(&content);
                    }
                }
            }
            Event::ChatReplied(reply) => {
                self.brainstorm.finish_send(reply);
                self.chat_scroll.last();
            }
            _ => {}
        }

        return Ok(());
    }
}
