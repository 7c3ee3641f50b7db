//! Messages feature slice.
//!
//! The message surface is parameterized by the current conversation id and
//! only accepts load results for that id.

mod render;
mod state;

pub use render::render_messages;
pub use state::{MessageView, MessagesState};
