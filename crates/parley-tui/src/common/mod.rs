//! Shared building blocks for the TUI.

pub mod task;
pub mod text;
pub mod theme;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use theme::Palette;
