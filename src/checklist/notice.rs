use std::time::{Duration, Instant};

use crate::{success, warning};

pub const MSG_LOAD_FAILED: &str = "Error fetching API groups";
pub const MSG_UPDATE_OK: &str = "API status updated successfully";
pub const MSG_UPDATE_FAILED: &str = "Error updating API status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown to the user.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub raised_at: Instant,
}

/// Holds the single message slot. A new notice replaces the previous one and
/// each notice disappears once its lifetime has passed.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    lifetime: Duration,
    echo: bool,
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
            echo: true,
        }
    }

    /// Keeps notices in memory only, without printing them.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn success(&mut self, message: &str) {
        if self.echo {
            success!("{}", message);
        }
        self.raise(NoticeKind::Success, message);
    }

    pub fn error(&mut self, message: &str) {
        if self.echo {
            warning!("{}", message);
        }
        self.raise(NoticeKind::Error, message);
    }

    /// The notice still visible right now.
    pub fn current(&self) -> Option<&Notice> {
        self.visible_at(Instant::now())
    }

    pub fn visible_at(&self, now: Instant) -> Option<&Notice> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.raised_at) < self.lifetime)
    }

    /// The most recent notice, visible or not.
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    fn raise(&mut self, kind: NoticeKind, message: &str) {
        self.current = Some(Notice {
            kind,
            message: message.to_string(),
            raised_at: Instant::now(),
        });
    }
}
