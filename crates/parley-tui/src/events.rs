//! UI event types.
//!
//! Everything the reducer reacts to is a `UiEvent`: terminal input, the
//! per-frame size probe, the periodic tick, events emitted by the list and
//! composer surfaces, and results of store operations delivered through the
//! runtime inbox.

use crossterm::event::Event;
use parley_core::conversations::{Conversation, ConversationId, Message, StoreError};

use crate::common::{TaskCompleted, TaskKind};
use crate::session::RequestSeq;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick for animation and notice expiry.
    Tick,

    /// Current terminal size, sent at the head of every loop iteration.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(Event),

    /// Conversation list surface.
    List(ListEvent),

    /// Composer surface.
    Composer(ComposerEvent),

    /// A creation request resolved. Guarded by the session's request
    /// sequence, not by the task lifecycle.
    ConversationCreated {
        seq: RequestSeq,
        result: Result<Conversation, StoreError>,
    },

    ConversationsLoaded(Result<Vec<Conversation>, StoreError>),

    MessagesLoaded {
        conversation_id: ConversationId,
        result: Result<Vec<Message>, StoreError>,
    },

    MessageSaved {
        conversation_id: ConversationId,
        result: Result<Message, StoreError>,
    },

    /// Wraps the result of a latest-wins task.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}

/// Events emitted by the conversation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Raw id as delivered by the surface; blank ids are ignored.
    Select(String),
    NewChat,
}

/// Events emitted by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// The composer started or stopped being active.
    TypingChanged(bool),
    MessageSent { content: String },
    /// Enter was pressed with a draft but no current conversation.
    SendWithoutConversation,
}
