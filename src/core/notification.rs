//! Toast notification payloads
//!
//! Built by the editor controller and rendered by the UI notification
//! container.

use serde::{Deserialize, Serialize};

/// Auto-dismiss delay for success and info toasts
pub const SHORT_DISMISS_MS: u32 = 3000;

/// Auto-dismiss delay for warnings
pub const LONG_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient user-visible message
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(SHORT_DISMISS_MS),
        }
    }

    /// Errors stay until the user dismisses them
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Warning,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(LONG_DISMISS_MS),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(SHORT_DISMISS_MS),
        }
    }

    pub fn is_error(&self) -> bool {
        self.notification_type == NotificationType::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sticky() {
        let n = Notification::error("Request failed", "boom");
        assert!(n.is_error());
        assert_eq!(n.auto_dismiss_ms, None);
    }

    #[test]
    fn test_dismiss_delays() {
        assert_eq!(
            Notification::success("Saved", "").auto_dismiss_ms,
            Some(SHORT_DISMISS_MS)
        );
        assert_eq!(
            Notification::warning("Careful", "").auto_dismiss_ms,
            Some(LONG_DISMISS_MS)
        );
        assert_eq!(
            Notification::info("Note", "").auto_dismiss_ms,
            Some(SHORT_DISMISS_MS)
        );
    }
}
