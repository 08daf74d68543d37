mod action;
mod backend;
mod chat;
mod editor_form;
mod event;
mod loading;
mod note;
mod outcome;
mod textarea;
mod transcript;
mod view;
mod wrap;

pub use action::*;
pub use backend::*;
pub use chat::*;
pub use editor_form::*;
pub use event::*;
pub use loading::*;
pub use note::*;
pub use outcome::*;
pub use textarea::*;
pub use transcript::*;
pub use view::*;
pub use wrap::*;
