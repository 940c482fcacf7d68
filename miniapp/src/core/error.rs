//! # Common Error Types
//!
//! Consolidated error handling for the Mini App client.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **Auth**: Telegram init-data exchange and session errors
//! - **Storage**: Device key-value storage errors (read/write/serialize)
//! - **Validation**: Input validation errors (card number, expiry, OTP)
//!
//! ## Error Conversion
//!
//! The per-endpoint API functions return `Result<T, String>` with
//! user-presentable messages; `From<String>` lifts those into
//! `AppError::Api` so store methods can use `?`.

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
///
/// # Example
///
/// ```rust
/// use miniapp::core::error::AppError;
///
/// let api_err = AppError::Api("Connection timeout".to_string());
/// let validation_err = AppError::Validation("Card number must be 16 digits".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection timeout");
/// assert_eq!(
///     validation_err.to_string(),
///     "Validation error: Card number must be 16 digits"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, non-2xx statuses and malformed response bodies all
    /// land here with a message suitable for a toast notification.
    #[error("API error: {0}")]
    Api(String),

    /// Telegram authentication error.
    ///
    /// Covers init-data exchange failures and missing/expired sessions. The
    /// bridge itself swallows these into an anonymous outcome; the variant
    /// exists for callers that need to surface an auth problem explicitly.
    #[error("Auth error: {0}")]
    Auth(String),

    /// Device storage error.
    ///
    /// Failures reading or writing the persistent key-value file (I/O errors,
    /// corrupt JSON).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation error.
    ///
    /// User input rejected before any request is made (bad card number,
    /// past expiry date, malformed OTP).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use miniapp::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Auth("no init data".to_string()).to_string(),
            "Auth error: no init data"
        );
        assert_eq!(
            AppError::Storage("disk full".to_string()).to_string(),
            "Storage error: disk full"
        );
    }

    #[test]
    fn test_string_converts_to_api_error() {
        let err: AppError = "Network error: timed out".to_string().into();
        match err {
            AppError::Api(msg) => assert_eq!(msg, "Network error: timed out"),
            _ => panic!("expected Api variant"),
        }
    }
}
