//! Application server value.
//!
//! `ToolServer` owns the immutable configuration and the tool registry
//! (and through it the provider client). It is built once at startup and
//! shared by every request; nothing in it is mutable.

use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::gateway::{Gateway, GeminiClient, GenerativeModel};
use crate::domains::tools::{ToolError, ToolInfo, ToolRegistry, ToolReply, ToolRequest};

/// The main server handler.
#[derive(Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool dispatch, including the provider gateway.
    registry: Arc<ToolRegistry>,
}

impl ToolServer {
    /// Create a server talking to the configured Gemini endpoint.
    pub fn new(config: Config) -> Result<Self> {
        let client = GeminiClient::new(&config.gemini)?;
        info!("Gemini client ready: {}", client.endpoint());
        Ok(Self::with_model(config, Arc::new(client)))
    }

    /// Create a server on top of any provider implementation.
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(Gateway::new(model))),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        self.registry.list_tools()
    }

    /// Run one tool request.
    #[instrument(skip_all, fields(tool = %request.tool))]
    pub async fn generate(
        &self,
        request: ToolRequest,
    ) -> std::result::Result<ToolReply, ToolError> {
        let reply = self.registry.handle(request).await?;
        info!(answered = reply.is_answer(), "Tool request completed");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::gateway::testing::ScriptedModel;
    use crate::domains::tools::ToolKind;
    use serde_json::json;

    #[test]
    fn test_metadata() {
        let server = ToolServer::with_model(Config::new("key"), ScriptedModel::replying("ok"));
        assert_eq!(server.name(), "gemini-tools-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.list_tools().len(), ToolKind::ALL.len());
    }

    #[test]
    fn test_new_builds_real_client() {
        assert!(ToolServer::new(Config::new("key")).is_ok());
    }

    #[tokio::test]
    async fn test_generate_goes_through_registry() {
        let model = ScriptedModel::replying("A short summary.");
        let server = ToolServer::with_model(Config::new("key"), model.clone());

        let data = json!({ "text": "long" }).to_string();
        let request = ToolRequest::parse(Some("summarizer"), Some(data.as_str()), None).unwrap();
        let reply = server.generate(request).await.unwrap();

        assert_eq!(reply, ToolReply::Answer("A short summary.".to_string()));
        assert_eq!(model.calls(), 1);
    }
}
