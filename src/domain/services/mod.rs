pub mod actions;
mod ai_gateway;
mod app_state;
mod brainstorm;
mod editor;
pub mod events;
mod note_store;
mod scroll;
mod storage;
mod view_controller;

pub use ai_gateway::*;
pub use app_state::*;
pub use brainstorm::*;
pub use editor::*;
pub use note_store::*;
pub use scroll::*;
pub use storage::*;
pub use view_controller::*;
