//! Composer feature slice.
//!
//! The message-composition surface: holds the draft, emits `MessageSent`
//! and the continuous `TypingChanged` activity signal.

mod render;
mod state;
mod update;

pub use render::{COMPOSER_HEIGHT, render_composer};
pub use state::ComposerState;
pub use update::{finish_send, handle_key, handle_paste};
