//! Message surface state.

use parley_core::conversations::{ConversationId, Message, StoreError};

/// What the message surface shows for its conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageView {
    NoConversation,
    Loading,
    Loaded(Vec<Message>),
    /// The selected id no longer resolves (stale selection).
    NotFound,
    Failed(String),
}

/// Messages of the conversation the surface is parameterized with.
#[derive(Debug)]
pub struct MessagesState {
    conversation_id: Option<ConversationId>,
    view: MessageView,
}

impl Default for MessagesState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessagesState {
    pub fn new() -> Self {
        Self {
            conversation_id: None,
            view: MessageView::NoConversation,
        }
    }

    pub fn conversation_id(&self) -> Option<&ConversationId> {
        self.conversation_id.as_ref()
    }

    pub fn view(&self) -> &MessageView {
        &self.view
    }

    /// Re-parameterizes the surface. Keeps loaded messages when the id is
    /// unchanged so a reload doesn't flash an empty pane.
    pub fn show(&mut self, conversation_id: Option<ConversationId>) {
        if conversation_id.is_some() && conversation_id == self.conversation_id {
            if !matches!(self.view, MessageView::Loaded(_)) {
                self.view = MessageView::Loading;
            }
            return;
        }
        self.view = if conversation_id.is_some() {
            MessageView::Loading
        } else {
            MessageView::NoConversation
        };
        self.conversation_id = conversation_id;
    }

    /// Applies a load result. Results for another conversation are dropped.
    pub fn apply_loaded(
        &mut self,
        conversation_id: &ConversationId,
        result: Result<Vec<Message>, StoreError>,
    ) -> bool {
        if self.conversation_id.as_ref() != Some(conversation_id) {
            return false;
        }
        self.view = match result {
            Ok(messages) => MessageView::Loaded(messages),
            Err(StoreError::NotFound(_)) => MessageView::NotFound,
            Err(error) => MessageView::Failed(error.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use parley_core::conversations::Role;

    use super::*;

    fn id(raw: &str) -> ConversationId {
        ConversationId::parse(raw).unwrap()
    }

    fn message(content: &str) -> Message {
        Message {
            role: Role::User,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_show_switches_to_loading() {
        let mut messages = MessagesState::new();
        assert_eq!(messages.view(), &MessageView::NoConversation);

        messages.show(Some(id("c1")));
        assert_eq!(messages.view(), &MessageView::Loading);

        messages.show(None);
        assert_eq!(messages.view(), &MessageView::NoConversation);
    }

    #[test]
    fn test_reload_of_same_conversation_keeps_messages() {
        let mut messages = MessagesState::new();
        messages.show(Some(id("c1")));
        messages.apply_loaded(&id("c1"), Ok(vec![message("hi")]));

        messages.show(Some(id("c1")));

        match messages.view() {
            MessageView::Loaded(loaded) => assert_eq!(loaded[0].content, "hi"),
            other => panic!("expected loaded messages, got {other:?}"),
        }
    }

    #[test]
    fn test_result_for_other_conversation_is_dropped() {
        let mut messages = MessagesState::new();
        messages.show(Some(id("c2")));

        assert!(!messages.apply_loaded(&id("c1"), Ok(vec![message("old")])));
        assert_eq!(messages.view(), &MessageView::Loading);
    }

    #[test]
    fn test_stale_selection_renders_not_found() {
        let mut messages = MessagesState::new();
        messages.show(Some(id("gone")));
        messages.apply_loaded(&id("gone"), Err(StoreError::NotFound(id("gone"))));
        assert_eq!(messages.view(), &MessageView::NotFound);

        messages.show(Some(id("c1")));
        messages.apply_loaded(&id("c1"), Err(StoreError::Unavailable("down".into())));
        assert_eq!(
            messages.view(),
            &MessageView::Failed("store unavailable: down".to_string())
        );
    }
}
