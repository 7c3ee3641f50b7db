//! Sidebar feature slice: the conversation list.
//!
//! The first row is a "+ New chat" entry; conversations follow, newest
//! first, with the current one highlighted.

mod render;
mod state;

pub use render::{SIDEBAR_WIDTH, render_sidebar};
pub use state::{SidebarHit, SidebarState};
