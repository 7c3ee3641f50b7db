use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{Conversation, ConversationId, ConversationStore, Message, Role, StoreError};

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order; listing reverses it to get newest first.
    conversations: Vec<Conversation>,
    messages: HashMap<ConversationId, Vec<Message>>,
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    inner: Mutex<Inner>,
    create_latency: Duration,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays every `create_conversation` call by `latency`.
    #[must_use]
    pub fn with_create_latency(mut self, latency: Duration) -> Self {
        self.create_latency = latency;
        self
    }

    /// Deletes a conversation and its messages. Returns whether it existed.
    pub async fn remove(&self, id: &ConversationId) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.conversations.len();
        inner.conversations.retain(|c| &c.id != id);
        inner.messages.remove(id);
        inner.conversations.len() != before
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn create_conversation(&self, title: &str) -> Result<Conversation, StoreError> {
        if !self.create_latency.is_zero() {
            tokio::time::sleep(self.create_latency).await;
        }

        let id = ConversationId::parse(Uuid::new_v4().to_string())
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let conversation = Conversation {
            id: id.clone(),
            title: title.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.lock().await;
        inner.conversations.push(conversation.clone());
        inner.messages.insert(id, Vec::new());
        tracing::debug!(id = %conversation.id, title, "conversation created");
        Ok(conversation)
    }

    async fn list_conversations(&self) -> Result<Vec<Conversation>, StoreError> {
        let inner = self.inner.lock().await;
        Ok(inner.conversations.iter().rev().cloned().collect())
    }

    async fn messages(&self, id: &ConversationId) -> Result<Vec<Message>, StoreError> {
        let inner = self.inner.lock().await;
        inner
            .messages
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn append_message(
        &self,
        id: &ConversationId,
        content: &str,
    ) -> Result<Message, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::Rejected("message is empty".to_string()));
        }

        let mut inner = self.inner.lock().await;
        let messages = inner
            .messages
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        let message = Message {
            role: Role::User,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        messages.push(message.clone());
        Ok(message)
    }
}
