//! API Errors
//!
//! Every client operation returns `ApiResult<T>`; nothing is swallowed.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the server's
    /// `error` text when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response at all (offline, DNS, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The response did not match the declared shape
    #[error("Unexpected response from server: {0}")]
    Validation(String),

    /// The request body could not be serialized
    #[error("Could not encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build the error for a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));
        ApiError::Server { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Server { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_passed_through() {
        let err = ApiError::from_response(400, r#"{"error":"Project name required"}"#);
        assert_eq!(err.to_string(), "Project name required");
    }

    #[test]
    fn test_body_without_error_field() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Server { status: 502, message: "Request failed with status 502".into() });
        assert!(ApiError::from_response(401, "").is_unauthorized());
    }
}
