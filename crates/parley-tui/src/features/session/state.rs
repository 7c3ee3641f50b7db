use std::collections::BTreeSet;
use std::fmt;

use parley_core::conversations::{Conversation, ConversationId, StoreError};
use thiserror::Error;

/// Monotonic sequence number of a user-initiated session request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestSeq(u64);

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Recoverable session failures, reported to the user as notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Failed to create conversation: {0}")]
    CreationFailed(#[source] StoreError),
}

/// Observable phase of the session, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase<'a> {
    /// Nothing selected and no creation that could still apply.
    Empty,
    Selected(&'a ConversationId),
    /// A creation is in flight and will become current if nothing newer
    /// is applied first. `previous` stays current until then.
    CreationPending {
        seq: RequestSeq,
        previous: Option<&'a ConversationId>,
    },
}

/// What happened when a creation result arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The new conversation is now current.
    Applied { conversation: Conversation },
    /// A more recent request was applied first; the result was dropped.
    Superseded { conversation: Conversation },
    /// The store failed. The selection is unchanged.
    Failed { error: SessionError },
    /// No creation with this sequence number is outstanding.
    Unknown,
}

/// Owner of the current conversation id.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Option<ConversationId>,
    issued: RequestSeq,
    last_applied: RequestSeq,
    outstanding: BTreeSet<RequestSeq>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ConversationId> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> SessionPhase<'_> {
        match self.outstanding.last() {
            Some(&seq) if seq > self.last_applied => SessionPhase::CreationPending {
                seq,
                previous: self.current.as_ref(),
            },
            _ => match &self.current {
                Some(id) => SessionPhase::Selected(id),
                None => SessionPhase::Empty,
            },
        }
    }

    /// Returns true while some creation could still become current.
    pub fn is_creating(&self) -> bool {
        matches!(self.phase(), SessionPhase::CreationPending { .. })
    }

    /// Makes `id` current, superseding every outstanding creation.
    ///
    /// Returns true if the current conversation changed.
    pub fn select(&mut self, id: ConversationId) -> bool {
        let seq = self.next_seq();
        self.last_applied = seq;
        let changed = self.current.as_ref() != Some(&id);
        tracing::debug!(%seq, id = %id, changed, "select conversation");
        self.current = Some(id);
        changed
    }

    /// Registers a new creation request and returns its sequence number.
    pub fn begin_create(&mut self) -> RequestSeq {
        let seq = self.next_seq();
        self.outstanding.insert(seq);
        tracing::debug!(%seq, "conversation creation requested");
        seq
    }

    /// Resolves the creation tagged `seq`.
    pub fn complete_create(
        &mut self,
        seq: RequestSeq,
        result: Result<Conversation, StoreError>,
    ) -> CreateOutcome {
        if !self.outstanding.remove(&seq) {
            tracing::warn!(%seq, "creation result for unknown request");
            return CreateOutcome::Unknown;
        }

        match result {
            Ok(conversation) if seq > self.last_applied => {
                self.last_applied = seq;
                self.current = Some(conversation.id.clone());
                tracing::info!(%seq, id = %conversation.id, "created conversation is now current");
                CreateOutcome::Applied { conversation }
            }
            Ok(conversation) => {
                tracing::info!(
                    %seq,
                    last_applied = %self.last_applied,
                    id = %conversation.id,
                    "creation superseded by a later request"
                );
                CreateOutcome::Superseded { conversation }
            }
            Err(error) => {
                tracing::warn!(%seq, %error, "conversation creation failed");
                CreateOutcome::Failed {
                    error: SessionError::CreationFailed(error),
                }
            }
        }
    }

    fn next_seq(&mut self) -> RequestSeq {
        self.issued = RequestSeq(self.issued.0 + 1);
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn id(raw: &str) -> ConversationId {
        ConversationId::parse(raw).unwrap()
    }

    fn conversation(raw: &str) -> Conversation {
        Conversation {
            id: id(raw),
            title: "New Chat".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let session = SessionState::new();
        assert_eq!(session.phase(), SessionPhase::Empty);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_select_reports_change() {
        let mut session = SessionState::new();
        assert!(session.select(id("c1")));
        assert!(!session.select(id("c1")));
        assert!(session.select(id("c2")));
        assert_eq!(session.phase(), SessionPhase::Selected(&id("c2")));
    }

    #[test]
    fn test_creation_applies_when_nothing_newer() {
        let mut session = SessionState::new();
        let seq = session.begin_create();
        assert_eq!(
            session.phase(),
            SessionPhase::CreationPending {
                seq,
                previous: None
            }
        );

        let outcome = session.complete_create(seq, Ok(conversation("c1")));

        assert!(matches!(outcome, CreateOutcome::Applied { .. }));
        assert_eq!(session.current(), Some(&id("c1")));
        assert_eq!(session.phase(), SessionPhase::Selected(&id("c1")));
    }

    #[test]
    fn test_select_during_creation_wins() {
        let mut session = SessionState::new();
        session.select(id("c1"));
        let seq = session.begin_create();
        session.select(id("c2"));
        assert_eq!(session.phase(), SessionPhase::Selected(&id("c2")));

        let outcome = session.complete_create(seq, Ok(conversation("c3")));

        assert!(matches!(outcome, CreateOutcome::Superseded { .. }));
        assert_eq!(session.current(), Some(&id("c2")));
    }

    #[test]
    fn test_out_of_order_creations_keep_latest() {
        let mut session = SessionState::new();
        let first = session.begin_create();
        let second = session.begin_create();

        assert!(matches!(
            session.complete_create(second, Ok(conversation("new"))),
            CreateOutcome::Applied { .. }
        ));
        assert!(matches!(
            session.complete_create(first, Ok(conversation("old"))),
            CreateOutcome::Superseded { .. }
        ));
        assert_eq!(session.current(), Some(&id("new")));
    }

    #[test]
    fn test_in_order_creations_end_on_latest() {
        let mut session = SessionState::new();
        let first = session.begin_create();
        let second = session.begin_create();

        session.complete_create(first, Ok(conversation("old")));
        assert!(session.is_creating());
        session.complete_create(second, Ok(conversation("new")));

        assert_eq!(session.current(), Some(&id("new")));
        assert!(!session.is_creating());
    }

    #[test]
    fn test_failure_leaves_selection_unchanged() {
        let mut session = SessionState::new();
        session.select(id("c1"));
        let seq = session.begin_create();

        let outcome =
            session.complete_create(seq, Err(StoreError::Unavailable("offline".into())));

        assert_eq!(
            outcome,
            CreateOutcome::Failed {
                error: SessionError::CreationFailed(StoreError::Unavailable("offline".into()))
            }
        );
        assert_eq!(session.phase(), SessionPhase::Selected(&id("c1")));
    }

    #[test]
    fn test_failure_from_empty_returns_to_empty() {
        let mut session = SessionState::new();
        let seq = session.begin_create();
        session.complete_create(seq, Err(StoreError::Rejected("quota".into())));
        assert_eq!(session.phase(), SessionPhase::Empty);
    }

    #[test]
    fn test_duplicate_or_unknown_completion_is_ignored() {
        let mut session = SessionState::new();
        let seq = session.begin_create();
        session.complete_create(seq, Ok(conversation("c1")));

        assert_eq!(
            session.complete_create(seq, Ok(conversation("c9"))),
            CreateOutcome::Unknown
        );
        assert_eq!(session.current(), Some(&id("c1")));
    }

    #[test]
    fn test_error_message_mentions_cause() {
        let error = SessionError::CreationFailed(StoreError::Unavailable("offline".into()));
        assert_eq!(
            error.to_string(),
            "Failed to create conversation: store unavailable: offline"
        );
    }
}
