//! Unified SDK error type.
//!
//! Every failure a call can produce (non-2xx status, transport failure,
//! malformed JSON, rejected argument) is an [`ApiError`]. The library does not
//! distinguish "not found" from "unauthorized" or "server error"; inspect
//! [`ApiError::status`] for that.

use thiserror::Error;

/// Result type alias for SDK operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a status outside 200–299.
    #[error("API request failed: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// DNS, connect, TLS, timeout or body-read failure.
    ///
    /// The inner error never carries the request URL, which holds the API key.
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// An argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ApiError {
    /// HTTP status code, when the failure came from a server response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}

/// Conversions that cannot fail, such as passing an enum where a
/// `TryInto<Enum>` is expected.
impl From<std::convert::Infallible> for ApiError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API request failed: 404 Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_invalid_argument_has_no_status() {
        let err = ApiError::invalid("unknown award kind 'platinum'");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("platinum"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err: ApiError = serde_err.into();
        assert!(matches!(err, ApiError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}
