//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Network**: the request never produced a response (DNS, connect, TLS, body read)
//! - **HttpStatus**: the API answered with something other than `200 OK`
//! - **Decode**: the body was not JSON of the expected shape
//! - **Terminal**: the display loop itself failed (raw mode, draw, input stream)
//! - **Config**: a configuration file could not be read or parsed, or the HTTP
//!   client could not be built
//!
//! `Terminal` errors and a client build failure at startup end the program.
//! A bad theme file falls back to defaults. Fetch errors are stored in
//! [`crate::app::AppState::last_error`] and rendered as `Error: <message>`.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use block_vision::core::error::AppError;
//!
//! let err = AppError::HttpStatus { status: 429, reason: "Too Many Requests".to_string() };
//! assert_eq!(err.to_string(), "received non-OK response: 429 Too Many Requests");
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// Every variant carries owned strings so the error is `Clone` and can travel
/// inside [`crate::app::AppEvent`] from a fetch task back to the event loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Transport failure before a response was received.
    #[error("failed to reach market API: {0}")]
    Network(String),

    /// Response status was not `200 OK`.
    #[error("received non-OK response: {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Response body did not match the expected JSON schema.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Terminal setup, drawing or input failure.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Malformed configuration file.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Terminal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Network("connection refused".to_string()).to_string(),
            "failed to reach market API: connection refused"
        );
        assert_eq!(
            AppError::Decode("missing field `coins`".to_string()).to_string(),
            "failed to decode response: missing field `coins`"
        );
        assert_eq!(
            AppError::HttpStatus { status: 500, reason: "Internal Server Error".to_string() }.to_string(),
            "received non-OK response: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_serde_error_converts_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Decode(_)));
    }

    #[test]
    fn test_io_error_converts_to_terminal() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        assert_eq!(AppError::from(err), AppError::Terminal("no tty".to_string()));
    }
}
