//! Error Types
//!
//! Failures a backend call can end in, plus configuration errors.

use thiserror::Error;

/// Outcome of a failed backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// HTTP 401 on a protected endpoint. Handled by redirect, never shown.
    #[error("authentication required")]
    Unauthenticated,

    /// Any other non-2xx response. `message` is the trimmed body text, if any.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user for this failure.
    ///
    /// Server-provided text wins; everything else falls back to `default`.
    /// Returns `None` for [`ApiError::Unauthenticated`], which is never shown.
    pub fn user_message(&self, default: &str) -> Option<String> {
        match self {
            Self::Unauthenticated => None,
            Self::Status { message: Some(text), .. } => Some(text.clone()),
            Self::Status { message: None, .. } | Self::Network(_) | Self::Decode(_) => {
                Some(default.to_string())
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Configuration errors detected at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {0:?}: {1}")]
    InvalidBaseUrl(String, String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_text_wins_over_default() {
        let err = ApiError::Status { status: 400, message: Some("Нет такого товара".into()) };
        assert_eq!(err.user_message("default").as_deref(), Some("Нет такого товара"));
    }

    #[test]
    fn test_default_used_without_body() {
        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message("Не удалось загрузить корзину").as_deref(), Some("Не удалось загрузить корзину"));
        assert_eq!(ApiError::Network("offline".into()).user_message("d").as_deref(), Some("d"));
        assert_eq!(ApiError::Decode("eof".into()).user_message("d").as_deref(), Some("d"));
    }

    #[test]
    fn test_unauthenticated_is_never_shown() {
        assert_eq!(ApiError::Unauthenticated.user_message("d"), None);
    }
}
