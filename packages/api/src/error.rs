//! Errors returned by [`crate::ApiClient`] calls.

use serde_json::Value;

/// Message shown whenever a request never produced a usable response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Why an API call failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    Encode(String),

    /// A bearer-authenticated call was attempted without a session token.
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Text for an inline error banner.
    ///
    /// Server-provided `detail` wins; transport and body failures collapse to
    /// [`NETWORK_ERROR_MESSAGE`]; anything else uses `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Network(_) | ApiError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Encode(error.to_string())
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// Plain `{"detail": "..."}` bodies return the string as is. Validation
/// failures carry a list of `{"msg": "..."}` objects, which are joined.
pub(crate) fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let detail = extract_detail(br#"{"detail":"Invalid email or password"}"#);
        assert_eq!(detail.as_deref(), Some("Invalid email or password"));
    }

    #[test]
    fn test_detail_validation_list() {
        let body = br#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("value is not a valid email address; field required")
        );
    }

    #[test]
    fn test_detail_missing_or_not_json() {
        assert_eq!(extract_detail(b"Internal Server Error"), None);
        assert_eq!(extract_detail(br#"{"message":"nope"}"#), None);
        assert_eq!(extract_detail(br#"{"detail":""}"#), None);
    }

    #[test]
    fn test_message_or() {
        let server = ApiError::Status {
            status: 400,
            detail: Some("Email already registered".to_string()),
        };
        assert_eq!(server.message_or("Registration failed"), "Email already registered");

        let bare = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(bare.message_or("Registration failed"), "Registration failed");
        assert_eq!(bare.status(), Some(500));

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or("Login failed"), NETWORK_ERROR_MESSAGE);
        assert_eq!(network.status(), None);
    }
}
