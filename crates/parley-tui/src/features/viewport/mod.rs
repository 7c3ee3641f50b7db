//! Viewport mode detection.
//!
//! Classifies the terminal as narrow (`Mobile`) or wide (`Desktop`) by
//! comparing its width with a fixed breakpoint. The runtime feeds the size
//! at the head of every loop iteration, so a resize is observed before any
//! user input queued behind it.

/// Layout class derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportMode {
    pub fn is_mobile(self) -> bool {
        matches!(self, ViewportMode::Mobile)
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewportMode::Mobile => "narrow",
            ViewportMode::Desktop => "wide",
        }
    }
}

/// The breakpoint and the mode derived from the last observed width.
#[derive(Debug, Clone)]
pub struct ViewportState {
    breakpoint: u16,
    mode: ViewportMode,
}

impl ViewportState {
    /// `breakpoint` is the first width (in columns) classified as desktop.
    pub fn new(breakpoint: u16) -> Self {
        Self {
            breakpoint,
            mode: ViewportMode::default(),
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Records a new width. Returns the new mode if the breakpoint was crossed.
    pub fn observe(&mut self, width: u16) -> Option<ViewportMode> {
        let mode = classify(width, self.breakpoint);
        if mode == self.mode {
            return None;
        }
        self.mode = mode;
        Some(mode)
    }
}

fn classify(width: u16, breakpoint: u16) -> ViewportMode {
    if width < breakpoint {
        ViewportMode::Mobile
    } else {
        ViewportMode::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_is_first_desktop_width() {
        assert_eq!(classify(99, 100), ViewportMode::Mobile);
        assert_eq!(classify(100, 100), ViewportMode::Desktop);
        assert_eq!(classify(0, 100), ViewportMode::Mobile);
    }

    #[test]
    fn test_observe_reports_only_crossings() {
        let mut viewport = ViewportState::new(100);

        assert_eq!(viewport.observe(80), Some(ViewportMode::Mobile));
        assert_eq!(viewport.observe(90), None);
        assert_eq!(viewport.observe(140), Some(ViewportMode::Desktop));
        assert_eq!(viewport.observe(120), None);
        assert_eq!(viewport.mode(), ViewportMode::Desktop);
    }
}
