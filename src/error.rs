//! Error types for user-pager
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Load failures are collapsed into a single user-visible line by
//! [`Error::user_message`].

use thiserror::Error;

/// Message shown for any non-success HTTP status
pub const BAD_STATUS_MESSAGE: &str = "Network response was not ok";

/// Message shown for failures that carry no message of their own
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// The main error type for user-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Load Errors
    // ============================================================================
    #[error("HTTP {status}: Network response was not ok")]
    HttpStatus { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("An unknown error occurred")]
    Unknown,

    #[error("Load cancelled before completion")]
    Cancelled,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    /// The one-line message rendered after `Error: ` when a load fails.
    ///
    /// Bad statuses collapse to a fixed message; transport and parse failures
    /// surface their own text; anything without a message falls back to
    /// [`UNKNOWN_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        let message = match self {
            Error::HttpStatus { .. } => return BAD_STATUS_MESSAGE.to_string(),
            Error::Unknown => return UNKNOWN_ERROR_MESSAGE.to_string(),
            Error::Http(e) => e.to_string(),
            Error::MalformedResponse { message } | Error::Other(message) => message.clone(),
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result type alias for user-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("page_size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_size': must be positive"
        );

        let err = Error::http_status(500);
        assert_eq!(err.to_string(), "HTTP 500: Network response was not ok");
    }

    #[test]
    fn test_user_message_bad_status() {
        assert_eq!(
            Error::http_status(500).user_message(),
            "Network response was not ok"
        );
        assert_eq!(
            Error::http_status(404).user_message(),
            "Network response was not ok"
        );
    }

    #[test]
    fn test_user_message_surfaces_inner_message() {
        let err = Error::malformed("missing field `users` at line 1 column 2");
        assert_eq!(
            err.user_message(),
            "missing field `users` at line 1 column 2"
        );
        assert_eq!(Error::Other("boom".into()).user_message(), "boom");
    }

    #[test]
    fn test_user_message_unknown_fallback() {
        assert_eq!(Error::Unknown.user_message(), "An unknown error occurred");
        assert_eq!(
            Error::Other("   ".into()).user_message(),
            "An unknown error occurred"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
