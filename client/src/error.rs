//! Error types for the job API client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the job API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not the JSON shape we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Configured base URL or path could not be joined into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::api_error(503, "down for maintenance");
        assert_eq!(
            err.to_string(),
            "API error (status 503): down for maintenance"
        );
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_parse_error_has_no_status() {
        assert_eq!(ClientError::Parse("eof".into()).status(), None);
    }
}
