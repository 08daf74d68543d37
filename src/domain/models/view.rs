use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum View {
    #[default]
    List,
    Read,
    Edit,
    Brainstorm,
}

/// Active view plus the note it is about. Both are always set together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub view: View,
    pub selected: Option<String>,
}

impl ViewState {
    pub fn new(view: View, selected: Option<String>) -> ViewState {
        return ViewState { view, selected };
    }

    pub fn is_selected(&self, id: &str) -> bool {
        return self.selected.as_deref() == Some(id);
    }
}

/// Entries of the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Notes,
    Write,
    Brainstorm,
}
