//! Notice feature slice.
//!
//! Recoverable failures (a rejected send, a failed creation) surface here as
//! short-lived notices instead of tearing down the session.

mod render;
mod state;

pub use render::render_status_line;
pub use state::{Notice, NoticeLevel, NoticeState};
