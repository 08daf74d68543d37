use tui_textarea::Input;

use super::TextArea;

const TITLE_LABEL: &str = "Title";
const TAGS_LABEL: &str = "Tags (comma separated)";
const CONTENT_LABEL: &str = "Start writing your thoughts...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Tags,
    Content,
}

impl EditorField {
    pub fn next(&self) -> EditorField {
        return match self {
            EditorField::Title => EditorField::Tags,
            EditorField::Tags => EditorField::Content,
            EditorField::Content => EditorField::Title,
        };
    }

    fn label(&self) -> &'static str {
        return match self {
            EditorField::Title => TITLE_LABEL,
            EditorField::Tags => TAGS_LABEL,
            EditorField::Content => CONTENT_LABEL,
        };
    }
}

/// Input widgets backing the editor view.
pub struct EditorForm<'a> {
    pub title: tui_textarea::TextArea<'a>,
    pub tags: tui_textarea::TextArea<'a>,
    pub content: tui_textarea::TextArea<'a>,
    focus: EditorField,
}

impl<'a> Default for EditorForm<'a> {
    fn default() -> EditorForm<'a> {
        return EditorForm::new("", "", "");
    }
}

impl<'a> EditorForm<'a> {
    pub fn new(title: &str, tags: &str, content: &str) -> EditorForm<'a> {
        let mut form = EditorForm {
            title: TextArea::with_text(TITLE_LABEL, title),
            tags: TextArea::with_text(TAGS_LABEL, tags),
            content: TextArea::with_text(CONTENT_LABEL, content),
            focus: EditorField::Title,
        };
        form.sync_focus();

        return form;
    }

    pub fn focus(&self) -> EditorField {
        return self.focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for field in [EditorField::Title, EditorField::Tags, EditorField::Content] {
            let focused = field == self.focus;
            let textarea = match field {
                EditorField::Title => &mut self.title,
                EditorField::Tags => &mut self.tags,
                EditorField::Content => &mut self.content,
            };
            TextArea::set_focus(textarea, field.label(), focused);
        }
    }

    pub fn input(&mut self, input: Input) {
        match self.focus {
            EditorField::Title => self.title.input(input),
            EditorField::Tags => self.tags.input(input),
            EditorField::Content => self.content.input(input),
        };
    }

    /// Current `(title, tags, content)` text.
    pub fn values(&self) -> (String, String, String) {
        return (
            TextArea::text(&self.title),
            TextArea::text(&self.tags),
            TextArea::text(&self.content),
        );
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = TextArea::with_text(CONTENT_LABEL, content);
        self.sync_focus();
    }
}
