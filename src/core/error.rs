//! Custom error types for WebSnap
//!
//! Provides a unified error handling system across all modules.

use std::time::Duration;
use thiserror::Error;

/// Main error type for WebSnap operations
#[derive(Error, Debug)]
pub enum WebSnapError {
    /// An operation exceeded its time budget
    #[error("Timed out after {}ms while {operation}", elapsed.as_millis())]
    Timeout {
        /// What was being attempted when the budget ran out
        operation: String,
        /// How long the operation was allowed to run
        elapsed: Duration,
    },

    /// Page or browser navigation failed
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// Browser process errors (spawn, crash, bad output)
    #[error("Browser error: {0}")]
    Browser(String),

    /// Screenshot capture errors
    #[error("Capture error: {0}")]
    Capture(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The target URL could not be parsed or uses an unsupported scheme
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors from the pre-flight check
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No Chrome or Chromium binary found
    #[error("No Chrome/Chromium binary found. Install Chrome or set WEBSNAP_CHROME to its path")]
    ChromeNotFound,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for WebSnap operations
pub type Result<T> = std::result::Result<T, WebSnapError>;

impl WebSnapError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, elapsed: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            elapsed,
        }
    }

    /// Create a navigation error
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create a browser error
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    /// Create a capture error
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-URL error
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Whether this error is a navigation failure
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classification() {
        let err = WebSnapError::timeout("loading page", Duration::from_millis(30000));
        assert!(err.is_timeout());
        assert!(!err.is_navigation());
    }

    #[test]
    fn test_navigation_classification() {
        let err = WebSnapError::navigation("DNS lookup failed");
        assert!(err.is_navigation());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_message_preserved_through_display() {
        let err = WebSnapError::navigation("connection refused");
        assert_eq!(err.to_string(), "Navigation failed: connection refused");

        let err = WebSnapError::capture("empty output file");
        assert_eq!(err.to_string(), "Capture error: empty output file");
    }

    #[test]
    fn test_timeout_display_includes_budget() {
        let err = WebSnapError::timeout("waiting for load", Duration::from_millis(1500));
        let msg = err.to_string();
        assert!(msg.contains("1500ms"));
        assert!(msg.contains("waiting for load"));
    }

    #[test]
    fn test_is_generic_error() {
        // Every variant must be usable as a boxed std error
        fn assert_std_error(_: &dyn std::error::Error) {}
        assert_std_error(&WebSnapError::navigation("x"));
        assert_std_error(&WebSnapError::timeout("x", Duration::from_secs(1)));
        assert_std_error(&WebSnapError::ChromeNotFound);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: WebSnapError = io.into();
        assert!(matches!(err, WebSnapError::Io(_)));
    }
}
