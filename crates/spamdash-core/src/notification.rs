use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Warning => "warning",
        }
    }
}

/// A transient message for the user. `ttl` is how long the front end
/// should keep it on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            ttl,
        }
    }

    pub fn warning(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
            ttl,
        }
    }

    pub fn is_warning(&self) -> bool {
        self.level == NotificationLevel::Warning
    }
}
