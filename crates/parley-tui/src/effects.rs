//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent store I/O and task spawning only, so the reducer stays
//! pure: it mutates state and returns effects, never awaiting anything.

use parley_core::conversations::ConversationId;

use crate::common::TaskId;
use crate::session::RequestSeq;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Create a conversation. Issued exactly once per new-chat action.
    CreateConversation { seq: RequestSeq, title: String },

    /// Reload the conversation list.
    LoadConversations { task: TaskId },

    /// Load the messages of a conversation.
    LoadMessages {
        task: TaskId,
        conversation_id: ConversationId,
    },

    /// Persist a user message.
    SendMessage {
        task: TaskId,
        conversation_id: ConversationId,
        content: String,
    },
}
