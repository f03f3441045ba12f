//! Errors returned by the backend client.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Error payload sent by the backend, e.g. `{"error": "User already exists"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "message")]
    error: String,
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a status code and raw response body.
    ///
    /// Falls back to a generic message when the body carries no `error` field.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::Rejected { status, message }
    }

    /// Text shown to the user on the page.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_error_field() {
        let err = ApiError::rejected(409, r#"{"error":"User already exists"}"#);
        assert_eq!(err.message(), "User already exists");
        assert!(matches!(err, ApiError::Rejected { status: 409, .. }));
    }

    #[test]
    fn test_rejected_accepts_message_field() {
        let err = ApiError::rejected(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[test]
    fn test_rejected_without_payload() {
        let err = ApiError::rejected(502, "<html>Bad gateway</html>");
        assert_eq!(err.message(), "Request failed with status 502");

        let err = ApiError::rejected(400, r#"{"error":"  "}"#);
        assert_eq!(err.message(), "Request failed with status 400");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.message().starts_with("Unexpected response"));
    }
}
