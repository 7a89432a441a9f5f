//! Error types for the client.

use thiserror::Error;

/// Client error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend returned a non-success status.
    #[error("Request failed ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// A team-member name did not resolve to any user.
    #[error("User with name {name} not found")]
    UserNotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// The user directory came back empty during team resolution.
    #[error("No users found in the directory")]
    NoUsers,

    /// Session persistence failure.
    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Extract a human-readable message from an error response body.
///
/// The backend reports failures as `{"error": ...}` or `{"detail": ...}`;
/// anything else is passed through verbatim.
pub(crate) fn api_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "detail"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_prefers_error_field() {
        let body = r#"{"error": "name taken", "detail": "duplicate"}"#;
        assert_eq!(api_message(body), "name taken");
    }

    #[test]
    fn test_api_message_falls_back_to_detail() {
        let body = r#"{"detail": "Not found."}"#;
        assert_eq!(api_message(body), "Not found.");
    }

    #[test]
    fn test_api_message_raw_body_passthrough() {
        assert_eq!(api_message("<h1>Bad Gateway</h1>"), "<h1>Bad Gateway</h1>");
        assert_eq!(api_message(""), "Unknown error");
    }

    #[test]
    fn test_api_message_non_string_fields_ignored() {
        // A JSON body whose error field is not a string falls through to raw.
        let body = r#"{"error": {"code": 42}}"#;
        assert_eq!(api_message(body), body);
    }
}
