//! Sidebar visibility.
//!
//! On wide terminals the conversation list is always drawn inline and the
//! `sidebar_open` flag has no visible effect. On narrow terminals the flag
//! gates an overlay, which closes on its own after navigation or when the
//! user clicks outside it.

use std::cell::Cell;

use ratatui::layout::{Position, Rect};

use crate::viewport::ViewportMode;

/// How the conversation list is presented this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarPresentation {
    Inline,
    Overlay,
    Hidden,
}

#[derive(Debug, Default)]
pub struct LayoutState {
    sidebar_open: bool,
    /// Sidebar rect (set during render, used for outside-click detection).
    pub sidebar_area: Cell<Rect>,
    /// Header toggle hint rect (empty on wide layouts).
    pub toggle_area: Cell<Rect>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn presentation(&self, mode: ViewportMode) -> SidebarPresentation {
        match (mode, self.sidebar_open) {
            (ViewportMode::Desktop, _) => SidebarPresentation::Inline,
            (ViewportMode::Mobile, true) => SidebarPresentation::Overlay,
            (ViewportMode::Mobile, false) => SidebarPresentation::Hidden,
        }
    }

    pub fn toggle(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Applies the autocollapse rule after a select or new-chat action.
    ///
    /// Only narrow layouts collapse; on desktop the flag is left alone.
    pub fn after_navigation(&mut self, mode: ViewportMode) -> bool {
        self.close_overlay(mode)
    }

    /// Handles a press on the header toggle hint. Returns whether it hit.
    pub fn on_toggle_hint(&mut self, column: u16, row: u16) -> bool {
        let hit = self.toggle_area.get().contains(Position::new(column, row));
        if hit {
            self.toggle();
        }
        hit
    }

    /// Closes the overlay on a pointer press outside the sidebar.
    pub fn on_pointer_down(&mut self, mode: ViewportMode, column: u16, row: u16) -> bool {
        let inside = self.sidebar_area.get().contains(Position::new(column, row));
        !inside && self.close_overlay(mode)
    }

    /// Closes the overlay if one is showing. Returns whether it closed.
    pub fn close_overlay(&mut self, mode: ViewportMode) -> bool {
        if mode.is_mobile() && self.sidebar_open {
            self.sidebar_open = false;
            return true;
        }
        false
    }
}
