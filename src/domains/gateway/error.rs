//! Provider-side error types.

use thiserror::Error;

/// Failures of a single call to the generative provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (connect, TLS, timeout...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("{status}: {body}")]
    Api { status: u16, body: String },

    /// A success status whose body could not be decoded.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ProviderError {
    /// Create an API error from a status code and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Extract a provider `message` from the error payload, if the payload is
    /// structured JSON. Both `{"message": ...}` and the Google envelope
    /// `{"error": {"message": ...}}` are recognised.
    pub fn message(&self) -> Option<String> {
        let raw = match self {
            Self::Api { body, .. } => body.clone(),
            other => other.to_string(),
        };

        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value
            .get("message")
            .or_else(|| value.get("error").and_then(|e| e.get("message")))
            .and_then(|m| m.as_str())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_google_envelope() {
        let err = ProviderError::api(
            400,
            r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#,
        );
        assert_eq!(err.message().as_deref(), Some("API key not valid."));
    }

    #[test]
    fn test_message_top_level() {
        let err = ProviderError::api(429, r#"{"message":"Quota exceeded"}"#);
        assert_eq!(err.message().as_deref(), Some("Quota exceeded"));
    }

    #[test]
    fn test_message_absent_for_plain_body() {
        let err = ProviderError::api(502, "Bad Gateway");
        assert!(err.message().is_none());
        assert_eq!(err.to_string(), "502: Bad Gateway");
    }
}
