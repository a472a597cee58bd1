use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity or category for user-visible notifications.
///
/// The severity picks the toast's styling class and its icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// Neutral informational message. Default severity.
    #[default]
    Info,
    /// Indicates a successful operation, such as a finished download.
    Success,
    /// A non-critical issue the user should be aware of.
    Warning,
    /// A failure the user has to act on, such as a network error.
    Danger,
}

impl NotificationType {
    /// Lowercase tag used in the `alert-<tag>` styling class.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
            NotificationType::Danger => "danger",
        }
    }

    /// Icon class for the toast. Only success has its own icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationType::Success => "fa-check-circle",
            _ => "fa-info-circle",
        }
    }
}

/// A notification payload sent by code that wants a toast on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    /// The type/severity of the notification, determining its visual style.
    pub notification_type: NotificationType,
    /// The text content to display to the user.
    pub message: String,
}

impl NotificationMessage {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Danger, message)
    }
}

/// A toast that has been put on screen. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationMessage> for NotificationRecord {
    fn from(value: NotificationMessage) -> Self {
        Self {
            message: value.message,
            notification_type: value.notification_type,
            created_at: Utc::now(),
        }
    }
}
