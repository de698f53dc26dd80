//! Error types for pagekit
//!
//! This module defines the error hierarchy for the whole crate.
//! All fallible public APIs return `Result<T, Error>` where Error is
//! defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Page Request Errors
    // ============================================================================
    #[error("Invalid page request: '{field}' {message}")]
    PageRequest {
        field: &'static str,
        message: String,
    },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded value is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    // ============================================================================
    // URI Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Base URL cannot be a base for relative paths: {url}")]
    CannotBeABase { url: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a page request error
    pub fn page_request(field: &'static str, message: impl Into<String>) -> Self {
        Self::PageRequest {
            field,
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error was caused by bad caller input
    ///
    /// Client errors map to a 400-class response at the API boundary;
    /// everything else is a fault in the deployment or the crate itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::PageRequest { .. } | Error::Base64(_) | Error::Utf8(_)
        )
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::page_request("limit", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid page request: 'limit' must be greater than zero"
        );

        let err = Error::config("missing base_url");
        assert_eq!(err.to_string(), "Configuration error: missing base_url");
    }

    #[test]
    fn test_is_client_error() {
        assert!(Error::page_request("offset", "must not be negative").is_client_error());
        assert!(Error::Utf8(String::from_utf8(vec![0xff]).unwrap_err()).is_client_error());

        assert!(!Error::config("bad").is_client_error());
        assert!(!Error::Other("oops".to_string()).is_client_error());
    }

    #[test]
    fn test_url_parse_conversion() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!err.is_client_error());
    }
}
