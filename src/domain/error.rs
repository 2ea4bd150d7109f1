//! Error types for the Holocron plugin.
//!
//! This module defines the centralized error type [`HolocronError`] and a type alias
//! [`Result`] used throughout the plugin. Fetch and parse failures are the only
//! errors the render pipeline produces; configuration and theme errors are
//! reported at load time and fall back to defaults.

use thiserror::Error;

/// The main error type for Holocron operations.
///
/// `Status`, `Parse` and `Shape` together form the single *fetch failure* kind
/// of the render pipeline: each one aborts the pass that produced it and is
/// logged, never shown to the user.
///
/// # Examples
///
/// ```
/// use holocron::HolocronError;
///
/// let err = HolocronError::Status { status: 404 };
/// assert!(err.is_fetch_failure());
/// assert_eq!(err.to_string(), "Request failed with HTTP status 404");
/// ```
#[derive(Debug, Error)]
pub enum HolocronError {
    /// The host reported a non-success HTTP status.
    ///
    /// Zellij reports transport failures (DNS, TLS, connection refused) as a
    /// non-success status as well, so this variant also covers network errors.
    #[error("Request failed with HTTP status {status}")]
    Status {
        /// HTTP status code returned by the host.
        status: u16,
    },

    /// The response body was not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response was JSON but not a catalog page.
    ///
    /// A page must be an object with an integer `count` and an array `results`.
    #[error("Response is not a catalog page: {0}")]
    Shape(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HolocronError {
    /// Returns `true` for the errors a page request can end in.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Parse(_) | Self::Shape(_))
    }
}

/// A specialized `Result` type for Holocron operations.
pub type Result<T> = std::result::Result<T, HolocronError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failures_are_classified() {
        let parse = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(HolocronError::from(parse).is_fetch_failure());
        assert!(HolocronError::Shape("missing count".into()).is_fetch_failure());
        assert!(!HolocronError::Theme("bad".into()).is_fetch_failure());
        assert!(!HolocronError::Config("bad".into()).is_fetch_failure());
    }
}
