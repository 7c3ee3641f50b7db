use std::cell::Cell;

use parley_core::conversations::{Conversation, ConversationId, StoreError};
use ratatui::layout::{Position, Rect};

/// What a pointer press inside the sidebar landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarHit {
    NewChat,
    Conversation(ConversationId),
}

/// Conversation list shown in the sidebar.
#[derive(Debug, Default)]
pub struct SidebarState {
    conversations: Vec<Conversation>,
    loaded: bool,
    error: Option<String>,
    /// First visible conversation row (set during render, read by hit tests).
    pub list_offset: Cell<usize>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the list with a fresh load. A failed load keeps the old rows.
    pub fn set_conversations(&mut self, result: Result<Vec<Conversation>, StoreError>) {
        match result {
            Ok(conversations) => {
                self.conversations = conversations;
                self.loaded = true;
                self.error = None;
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
    }

    /// Puts a conversation at the top of the list, replacing any stale copy.
    pub fn upsert(&mut self, conversation: Conversation) {
        self.conversations.retain(|c| c.id != conversation.id);
        self.conversations.insert(0, conversation);
    }

    pub fn position(&self, id: &ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| &c.id == id)
    }

    /// The conversation `delta` rows away from `current`, clamped to the list.
    ///
    /// With no current conversation, moving down starts at the top and moving
    /// up starts at the bottom.
    pub fn neighbor(&self, current: Option<&ConversationId>, delta: isize) -> Option<ConversationId> {
        let len = self.conversations.len();
        if len == 0 {
            return None;
        }
        let target = match current.and_then(|id| self.position(id)) {
            Some(idx) => idx.saturating_add_signed(delta).min(len - 1),
            None if delta < 0 => len - 1,
            None => 0,
        };
        Some(self.conversations[target].id.clone())
    }

    /// Maps a pointer position to a sidebar row. `area` is the bordered
    /// sidebar rect drawn last frame.
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<SidebarHit> {
        let inner = inner_area(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let line = (row - inner.y) as usize;
        if line == 0 {
            return Some(SidebarHit::NewChat);
        }
        self.conversations
            .get(self.list_offset.get() + line - 1)
            .map(|c| SidebarHit::Conversation(c.id.clone()))
    }
}

/// The sidebar's content area inside its border.
pub(super) fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
