//! Generation gateway.
//!
//! The gateway is the single point of contact with the provider. It issues
//! exactly one call per request and folds every possible result into a
//! `GenerationOutcome`; nothing is raised to the caller.

use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};

use super::client::GenerativeModel;
use super::error::ProviderError;
use super::model::{GenerateRequest, ImageAttachment, SafetyRating};

const EMPTY_RESPONSE: &str = "Received an empty or unexpected response from the AI.";

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Generated text.
    Text(String),

    /// No content came back; the provider gave this reason.
    Blocked {
        reason: String,
        safety_ratings: Vec<SafetyRating>,
    },

    /// The call failed or the response could not be interpreted.
    Error(String),
}

impl GenerationOutcome {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Collapse into generated text or a user-facing error string.
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Blocked { reason, .. } => {
                write!(f, "Error: The response was blocked or empty. Reason: {reason}")
            }
            Self::Error(message) => write!(f, "Error: {message}"),
        }
    }
}

/// Wrapper around the configured provider.
#[derive(Clone)]
pub struct Gateway {
    model: Arc<dyn GenerativeModel>,
}

impl Gateway {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Run one generation call for `prompt`, with `image` as a second part
    /// when present.
    pub async fn generate(
        &self,
        prompt: &str,
        image: Option<&ImageAttachment>,
    ) -> GenerationOutcome {
        let request = match image {
            Some(image) => GenerateRequest::multimodal(prompt, image),
            None => GenerateRequest::text(prompt),
        };

        match self.model.generate_content(request).await {
            Ok(response) => match response.text() {
                Some(text) => GenerationOutcome::Text(text),
                None => {
                    let reason = response.block_reason().unwrap_or("Unknown").to_string();
                    let safety_ratings = response.safety_ratings();
                    warn!(
                        "Gemini response blocked or empty. Reason: {}, Safety: {:?}",
                        reason, safety_ratings
                    );
                    GenerationOutcome::Blocked {
                        reason,
                        safety_ratings,
                    }
                }
            },
            Err(ProviderError::UnexpectedResponse(detail)) => {
                warn!("Gemini response was empty or structure unexpected: {}", detail);
                GenerationOutcome::Error(EMPTY_RESPONSE.to_string())
            }
            Err(e) => {
                error!("Error calling Gemini API: {}", e);
                match e.message() {
                    Some(message) => {
                        GenerationOutcome::Error(format!("Gemini API request failed - {message}"))
                    }
                    None => GenerationOutcome::Error(format!(
                        "An error occurred while contacting the AI: {e}"
                    )),
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted provider used by gateway, dispatcher and HTTP tests.

    use super::*;
    use crate::domains::gateway::GenerateResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    pub enum Scripted {
        Response(GenerateResponse),
        Fail(fn() -> ProviderError),
    }

    /// Replays one scripted answer for every call and records each request.
    pub struct ScriptedModel {
        answer: Scripted,
        pub requests: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedModel {
        pub fn new(answer: Scripted) -> Arc<Self> {
            Arc::new(Self {
                answer,
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn replying(text: &str) -> Arc<Self> {
            let response = serde_json::from_value(serde_json::json!({
                "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
            }))
            .unwrap();
            Self::new(Scripted::Response(response))
        }

        pub fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Text of the first part of the last request.
        pub fn last_prompt(&self) -> Option<String> {
            self.requests
                .lock()
                .unwrap()
                .last()
                .and_then(|r| r.contents.first())
                .and_then(|c| c.parts.first())
                .and_then(|p| p.text.clone())
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate_content(
            &self,
            request: GenerateRequest,
        ) -> Result<GenerateResponse, ProviderError> {
            self.requests.lock().unwrap().push(request);
            match &self.answer {
                Scripted::Response(response) => Ok(response.clone()),
                Scripted::Fail(make) => Err(make()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Scripted, ScriptedModel};
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> Scripted {
        Scripted::Response(serde_json::from_value(value).unwrap())
    }

    #[tokio::test]
    async fn test_text_response() {
        let model = ScriptedModel::replying("A fleeting thing.");
        let gateway = Gateway::new(model.clone());

        let outcome = gateway.generate("define ephemeral", None).await;
        assert_eq!(outcome, GenerationOutcome::Text("A fleeting thing.".to_string()));
        assert_eq!(model.calls(), 1);
        assert_eq!(model.last_prompt().as_deref(), Some("define ephemeral"));
    }

    #[tokio::test]
    async fn test_image_is_sent_as_second_part() {
        let model = ScriptedModel::replying("A cat.");
        let gateway = Gateway::new(model.clone());
        let image = ImageAttachment::new("image/jpeg", &b"jpeg"[..]);

        gateway.generate("What is this?", Some(&image)).await;

        let requests = model.requests.lock().unwrap();
        let parts = &requests[0].contents[0].parts;
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1].inline_data.as_ref().map(|d| d.mime_type.as_str()),
            Some("image/jpeg")
        );
    }

    #[tokio::test]
    async fn test_blocked_response_carries_reason() {
        let model = ScriptedModel::new(response(json!({
            "candidates": [{
                "finishReason": "SAFETY",
                "safetyRatings": [{ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "probability": "HIGH" }]
            }]
        })));
        let gateway = Gateway::new(model);

        let outcome = gateway.generate("prompt", None).await;
        match &outcome {
            GenerationOutcome::Blocked {
                reason,
                safety_ratings,
            } => {
                assert_eq!(reason, "SAFETY");
                assert_eq!(safety_ratings.len(), 1);
            }
            other => panic!("expected blocked outcome, got {other:?}"),
        }
        assert_eq!(
            outcome.into_result().unwrap_err(),
            "Error: The response was blocked or empty. Reason: SAFETY"
        );
    }

    #[tokio::test]
    async fn test_empty_response_reason_unknown() {
        let model = ScriptedModel::new(response(json!({})));
        let gateway = Gateway::new(model);

        let outcome = gateway.generate("prompt", None).await;
        assert_eq!(
            outcome.to_string(),
            "Error: The response was blocked or empty. Reason: Unknown"
        );
    }

    #[tokio::test]
    async fn test_undecodable_response() {
        let model = ScriptedModel::new(Scripted::Fail(|| {
            ProviderError::UnexpectedResponse("expected value".to_string())
        }));
        let gateway = Gateway::new(model);

        let outcome = gateway.generate("prompt", None).await;
        assert_eq!(
            outcome.to_string(),
            "Error: Received an empty or unexpected response from the AI."
        );
    }

    #[tokio::test]
    async fn test_api_error_with_message() {
        let model = ScriptedModel::new(Scripted::Fail(|| {
            ProviderError::api(403, r#"{"error":{"message":"Permission denied"}}"#)
        }));
        let gateway = Gateway::new(model);

        let outcome = gateway.generate("prompt", None).await;
        assert_eq!(
            outcome.to_string(),
            "Error: Gemini API request failed - Permission denied"
        );
    }

    #[tokio::test]
    async fn test_api_error_without_message() {
        let model = ScriptedModel::new(Scripted::Fail(|| ProviderError::api(503, "unavailable")));
        let gateway = Gateway::new(model);

        let outcome = gateway.generate("prompt", None).await;
        assert_eq!(
            outcome.to_string(),
            "Error: An error occurred while contacting the AI: 503: unavailable"
        );
        assert!(!outcome.is_text());
    }
}
