//! Feature slices for the TUI (state/update/render per slice).

pub mod composer;
pub mod layout;
pub mod messages;
pub mod model;
pub mod notice;
pub mod session;
pub mod sidebar;
pub mod typing;
pub mod viewport;
