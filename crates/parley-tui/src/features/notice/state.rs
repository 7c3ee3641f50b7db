//! Transient notices shown in the status line.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub shown_at: Instant,
}

/// Holds at most one notice; a newer one replaces the old.
#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, NoticeLevel::Info);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text, NoticeLevel::Error);
    }

    pub fn push(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.current = Some(Notice {
            text: text.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Drops the notice once it has been visible for `ttl`.
    pub fn expire(&mut self, now: Instant, ttl: Duration) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|notice| now.saturating_duration_since(notice.shown_at) >= ttl);
        if expired {
            self.current = None;
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut notices = NoticeState::new();
        notices.info("first");
        notices.error("second");

        let notice = notices.current().unwrap();
        assert_eq!(notice.text, "second");
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_expire_after_ttl() {
        let mut notices = NoticeState::new();
        notices.info("saved");
        let shown_at = notices.current().unwrap().shown_at;
        let ttl = Duration::from_secs(5);

        assert!(!notices.expire(shown_at + Duration::from_secs(1), ttl));
        assert!(notices.current().is_some());

        assert!(notices.expire(shown_at + ttl, ttl));
        assert!(notices.current().is_none());
    }
}
