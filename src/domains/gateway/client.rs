//! Gemini REST client.
//!
//! `GenerativeModel` is the seam between the gateway and the provider; the
//! production implementation talks to the Gemini REST API with reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::ProviderError;
use super::model::{GenerateRequest, GenerateResponse};
use crate::core::config::GeminiConfig;

/// A provider capable of one-shot content generation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ProviderError>;
}

/// Client for `models/{model}:generateContent`.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client from provider configuration.
    pub fn new(config: &GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ProviderError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::api(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::UnexpectedResponse(e.to_string()))
    }
}
