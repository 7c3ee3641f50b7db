//! Session identity: which conversation is current.
//!
//! Every user-initiated request (explicit select or new chat) takes the next
//! [`RequestSeq`]. A select is applied immediately. A creation is applied
//! when its result arrives, and only if nothing more recent was applied in
//! the meantime (`seq > last_applied`). A slow creation therefore never
//! steals the selection from a user who already navigated elsewhere; its
//! result is simply dropped.

mod state;

pub use state::{CreateOutcome, RequestSeq, SessionError, SessionPhase, SessionState};
