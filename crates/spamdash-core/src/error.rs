use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Backend returned {status}: {}", .msg.as_deref().unwrap_or("no message"))]
    Backend { status: u16, msg: Option<String> },

    #[error("Response missing content field: {}", .msg.as_deref().unwrap_or("no message"))]
    MissingContent { msg: Option<String> },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown sample category: {0}")]
    UnknownCategory(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Message supplied by the backend in its error payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DashboardError::Backend { msg, .. } | DashboardError::MissingContent { msg } => {
                msg.as_deref()
            }
            _ => None,
        }
    }

    /// Text to show the user: the backend's message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_msg() {
        let err = DashboardError::Backend {
            status: 500,
            msg: Some("model unavailable".to_string()),
        };
        assert_eq!(err.user_message("generic"), "model unavailable");
        assert_eq!(err.to_string(), "Backend returned 500: model unavailable");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = DashboardError::Http("connection refused".to_string());
        assert_eq!(err.user_message("generic"), "generic");

        let err = DashboardError::Backend { status: 502, msg: None };
        assert_eq!(err.user_message("generic"), "generic");
        assert_eq!(err.to_string(), "Backend returned 502: no message");
    }

    #[test]
    fn test_missing_content_keeps_msg() {
        let err = DashboardError::MissingContent {
            msg: Some("missing text value".to_string()),
        };
        assert_eq!(err.user_message("generic"), "missing text value");

        let err = DashboardError::MissingContent { msg: None };
        assert_eq!(err.user_message("generic"), "generic");
    }
}
