//! Typing/streaming signal relay.
//!
//! A single boolean carried from the composer to the message surface. Only
//! the latest value matters; intermediate values may be overwritten before
//! a frame is drawn. The relay is not keyed to a conversation, so the
//! reducer clears it whenever the current conversation changes.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TypingRelay {
    active: bool,
}

impl TypingRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the composer's latest activity value. Returns true on change.
    pub fn publish(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    /// The value the message surface renders as `is_typing`.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
