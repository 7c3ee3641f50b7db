//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that call the conversation store and
//! return a `UiEvent`. They never touch `AppState`; the runtime spawns them
//! and forwards the result to the inbox.

pub mod conversation;

pub use conversation::*;
