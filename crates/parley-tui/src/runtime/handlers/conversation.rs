use std::sync::Arc;

use parley_core::conversations::{ConversationId, ConversationStore};

use crate::events::UiEvent;
use crate::session::RequestSeq;

pub type SharedStore = Arc<dyn ConversationStore>;

/// Creates a conversation. The result carries `seq` back to the session.
pub async fn conversation_create(store: SharedStore, seq: RequestSeq, title: String) -> UiEvent {
    let result = store.create_conversation(&title).await;
    if let Err(error) = &result {
        tracing::warn!(%seq, %error, "create_conversation failed");
    }
    UiEvent::ConversationCreated { seq, result }
}

pub async fn conversation_list_load(store: SharedStore) -> UiEvent {
    UiEvent::ConversationsLoaded(store.list_conversations().await)
}

pub async fn messages_load(store: SharedStore, conversation_id: ConversationId) -> UiEvent {
    let result = store.messages(&conversation_id).await;
    UiEvent::MessagesLoaded {
        conversation_id,
        result,
    }
}

pub async fn message_send(
    store: SharedStore,
    conversation_id: ConversationId,
    content: String,
) -> UiEvent {
    let result = store.append_message(&conversation_id, &content).await;
    UiEvent::MessageSaved {
        conversation_id,
        result,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use parley_core::config::Config;
    use parley_core::conversations::{
        Conversation, InMemoryConversationStore, Message, StoreError,
    };

    use super::*;
    use crate::effects::UiEffect;
    use crate::events::ListEvent;
    use crate::session::SessionPhase;
    use crate::state::AppState;
    use crate::update::update;

    /// Store whose every call fails.
    struct UnavailableStore;

    #[async_trait]
    impl ConversationStore for UnavailableStore {
        async fn create_conversation(&self, _title: &str) -> Result<Conversation, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn list_conversations(&self) -> Result<Vec<Conversation>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn messages(&self, id: &ConversationId) -> Result<Vec<Message>, StoreError> {
            Err(StoreError::NotFound(id.clone()))
        }

        async fn append_message(
            &self,
            _id: &ConversationId,
            _content: &str,
        ) -> Result<Message, StoreError> {
            Err(StoreError::Rejected("read only".into()))
        }
    }

    fn create_effect(effects: Vec<UiEffect>) -> (RequestSeq, String) {
        match effects.as_slice() {
            [UiEffect::CreateConversation { seq, title }] => (*seq, title.clone()),
            other => panic!("expected a create effect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_and_load() {
        let store: SharedStore = Arc::new(InMemoryConversationStore::new());
        let seq = RequestSeq::default();

        let created = match conversation_create(store.clone(), seq, "New Chat".into()).await {
            UiEvent::ConversationCreated { seq: got, result } => {
                assert_eq!(got, seq);
                result.unwrap()
            }
            other => panic!("unexpected event {other:?}"),
        };
        assert_eq!(created.title, "New Chat");

        match conversation_list_load(store.clone()).await {
            UiEvent::ConversationsLoaded(Ok(list)) => assert_eq!(list, vec![created.clone()]),
            other => panic!("unexpected event {other:?}"),
        }

        match message_send(store.clone(), created.id.clone(), "hi".into()).await {
            UiEvent::MessageSaved { result, .. } => assert_eq!(result.unwrap().content, "hi"),
            other => panic!("unexpected event {other:?}"),
        }

        match messages_load(store, created.id.clone()).await {
            UiEvent::MessagesLoaded {
                conversation_id,
                result,
            } => {
                assert_eq!(conversation_id, created.id);
                assert_eq!(result.unwrap().len(), 1);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_messages_of_removed_conversation_are_not_found() {
        let memory = Arc::new(InMemoryConversationStore::new());
        let created = memory.create_conversation("New Chat").await.unwrap();
        assert!(memory.remove(&created.id).await);

        match messages_load(memory, created.id.clone()).await {
            UiEvent::MessagesLoaded { result, .. } => {
                assert_eq!(result, Err(StoreError::NotFound(created.id)));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_creation_leaves_selection_unchanged() {
        let store: SharedStore = Arc::new(UnavailableStore);
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::List(ListEvent::Select("c1".into())));

        let (seq, title) = create_effect(update(&mut app, UiEvent::List(ListEvent::NewChat)));
        let event = conversation_create(store, seq, title).await;
        update(&mut app, event);

        assert_eq!(app.session.current().map(ConversationId::as_str), Some("c1"));
        assert!(
            app.notice
                .current()
                .is_some_and(|notice| notice.text.contains("connection refused"))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_creation_loses_to_later_select() {
        let store: SharedStore = Arc::new(
            InMemoryConversationStore::new().with_create_latency(Duration::from_millis(500)),
        );
        let mut app = AppState::new(Config::default());
        update(&mut app, UiEvent::List(ListEvent::Select("c1".into())));

        let (seq, title) = create_effect(update(&mut app, UiEvent::List(ListEvent::NewChat)));
        let pending = tokio::spawn(conversation_create(store.clone(), seq, title));

        // The user navigates while the store is still working.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!pending.is_finished());
        update(&mut app, UiEvent::List(ListEvent::Select("c2".into())));

        let event = pending.await.unwrap();
        let effects = update(&mut app, event);

        let c2 = ConversationId::parse("c2").unwrap();
        assert_eq!(app.session.phase(), SessionPhase::Selected(&c2));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::LoadConversations { .. }]
        ));
        match conversation_list_load(store).await {
            UiEvent::ConversationsLoaded(Ok(list)) => assert_eq!(list.len(), 1),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
