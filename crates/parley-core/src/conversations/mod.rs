//! Conversations and the store that owns them.
//!
//! The session core only depends on the [`ConversationStore`] trait. How a
//! store keeps its data is its own business; [`InMemoryConversationStore`]
//! is the implementation used by the terminal client.

mod memory;

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
pub use memory::InMemoryConversationStore;
use thiserror::Error;

/// Opaque conversation identifier assigned by the store.
///
/// Never empty: construction rejects blank input, so the session core can
/// treat any `ConversationId` as well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(String);

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conversation id must not be empty")]
pub struct EmptyConversationId;

impl ConversationId {
    /// Parses an identifier, rejecting empty or whitespace-only input.
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmptyConversationId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmptyConversationId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display (first 8 chars).
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted thread of chat messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Errors reported by a [`ConversationStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The conversation does not exist (never created, or deleted elsewhere).
    #[error("conversation {0} not found")]
    NotFound(ConversationId),

    /// The store could not be reached or failed internally.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Storage backend for conversations and their messages.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Creates a conversation with `title` and returns it with its new id.
    async fn create_conversation(&self, title: &str) -> Result<Conversation, StoreError>;

    /// Lists all conversations, newest first.
    async fn list_conversations(&self) -> Result<Vec<Conversation>, StoreError>;

    /// Returns the messages of a conversation in chronological order.
    async fn messages(&self, id: &ConversationId) -> Result<Vec<Message>, StoreError>;

    /// Appends a user message to a conversation.
    async fn append_message(
        &self,
        id: &ConversationId,
        content: &str,
    ) -> Result<Message, StoreError>;
}
