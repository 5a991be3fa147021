//! Notification model
//!
//! Temporary feedback messages (theme changes, opened links, save failures).

use std::time::{Duration, Instant};

/// How long a notification stays on screen.
const TTL: Duration = Duration::from_secs(4);

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

/// A transient message shown in the title bar of the current view.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// True once the message has outlived its display window.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TTL
    }
}
