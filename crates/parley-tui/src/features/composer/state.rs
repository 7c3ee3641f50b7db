//! Composer state.

use crate::events::ComposerEvent;

/// Draft text plus the activity signal derived from it.
///
/// Activity means "the user is drafting or a send is in flight". Changes
/// are reported once per transition as [`ComposerEvent::TypingChanged`].
#[derive(Debug, Default)]
pub struct ComposerState {
    draft: String,
    sending: bool,
    /// Last activity value reported to the relay.
    reported: bool,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn is_active(&self) -> bool {
        self.sending || !self.draft.trim().is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        self.draft.push(ch);
    }

    /// Appends pasted text; line breaks become spaces (single-line draft).
    pub fn insert_str(&mut self, text: &str) {
        self.draft
            .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Takes the draft for sending and marks a send in flight.
    ///
    /// Returns `None` (and keeps the draft) when there is nothing to send.
    pub fn begin_send(&mut self) -> Option<String> {
        let content = self.draft.trim();
        if content.is_empty() {
            return None;
        }
        let content = content.to_string();
        self.draft.clear();
        self.sending = true;
        Some(content)
    }

    pub fn finish_send(&mut self) {
        self.sending = false;
    }

    /// Starts fresh for a newly current conversation.
    ///
    /// The activity is considered already reported as `false`; the caller
    /// clears the relay at the same time.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.sending = false;
        self.reported = false;
    }

    /// Returns a `TypingChanged` event if activity differs from the last
    /// reported value.
    pub fn take_signal(&mut self) -> Option<ComposerEvent> {
        let active = self.is_active();
        if active == self.reported {
            return None;
        }
        self.reported = active;
        Some(ComposerEvent::TypingChanged(active))
    }
}
