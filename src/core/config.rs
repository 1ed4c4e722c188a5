//! Configuration management for the tools server.
//!
//! This module provides a centralized configuration structure populated
//! from environment variables (and an optional `.env` file), with defaults
//! for everything except the provider credential.

use super::error::{Error, Result};
use super::transport::HttpConfig;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Main configuration structure for the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP transport configuration.
    pub transport: HttpConfig,

    /// Generative provider configuration.
    pub gemini: GeminiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The name of the server as reported in logs and `/health`.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Gemini provider.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent with every generation call.
    pub api_key: String,

    /// Model identifier, e.g. `gemini-1.5-flash-latest`.
    pub model: String,

    /// Base URL of the REST API.
    pub base_url: String,

    /// Optional request timeout in seconds. `None` keeps the client default.
    pub timeout_secs: Option<u64>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash-latest";
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a provider config with default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Create a configuration with default values around the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                name: "gemini-tools-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
            gemini: GeminiConfig::new(api_key),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `GOOGLE_API_KEY` is mandatory and `GEMINI_TIMEOUT_SECS`, when set, must
    /// parse. Either failure is a configuration error and the process refuses
    /// to start.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::config(format!("{API_KEY_VAR} not found in environment")))?;

        let mut config = Self::new(api_key);

        if let Ok(name) = std::env::var("SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.gemini.model = model;
        }

        if let Ok(base_url) = std::env::var("GEMINI_API_BASE") {
            config.gemini.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout) = std::env::var("GEMINI_TIMEOUT_SECS") {
            let secs = timeout.trim().parse().map_err(|_| {
                Error::config(format!(
                    "GEMINI_TIMEOUT_SECS must be whole seconds, got {timeout:?}"
                ))
            })?;
            config.gemini.timeout_secs = Some(secs);
        }

        config.transport = HttpConfig::from_env();

        Ok(config)
    }
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`), then
/// restore their previous values.
#[cfg(test)]
pub(crate) fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _lock = ENV_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<_> = vars
        .iter()
        .map(|(name, _)| (*name, std::env::var(name).ok()))
        .collect();

    let apply = |name: &str, value: Option<&str>| unsafe {
        match value {
            Some(value) => std::env::set_var(name, value),
            None => std::env::remove_var(name),
        }
    };

    for (name, value) in vars {
        apply(name, *value);
    }
    let result = f();
    for (name, value) in &saved {
        apply(name, value.as_deref());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_config_error() {
        let result = with_env(&[(API_KEY_VAR, None)], Config::from_env);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_blank_api_key_is_config_error() {
        let result = with_env(&[(API_KEY_VAR, Some("   "))], Config::from_env);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_api_key_and_overrides_from_env() {
        let config = with_env(
            &[
                (API_KEY_VAR, Some("test_key_12345")),
                ("GEMINI_MODEL", Some("gemini-2.0-flash")),
                ("GEMINI_API_BASE", Some("http://localhost:9999/")),
                ("LOG_LEVEL", Some("debug")),
                ("SERVER_NAME", Some("tools-test")),
                ("GEMINI_TIMEOUT_SECS", None),
            ],
            Config::from_env,
        )
        .unwrap();

        assert_eq!(config.gemini.api_key, "test_key_12345");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.base_url, "http://localhost:9999");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.server.name, "tools-test");
        assert!(config.gemini.timeout_secs.is_none());
    }

    #[test]
    fn test_defaults_when_only_key_set() {
        let config = with_env(
            &[
                (API_KEY_VAR, Some("key")),
                ("GEMINI_MODEL", None),
                ("GEMINI_API_BASE", None),
                ("LOG_LEVEL", None),
                ("GEMINI_TIMEOUT_SECS", None),
            ],
            Config::from_env,
        )
        .unwrap();

        assert_eq!(config.gemini.model, GeminiConfig::DEFAULT_MODEL);
        assert_eq!(config.gemini.base_url, GeminiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_timeout_from_env() {
        let config = with_env(
            &[(API_KEY_VAR, Some("key")), ("GEMINI_TIMEOUT_SECS", Some("30"))],
            Config::from_env,
        )
        .unwrap();
        assert_eq!(config.gemini.timeout_secs, Some(30));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        for bad in ["soon", "-5", "1.5"] {
            let result = with_env(
                &[(API_KEY_VAR, Some("key")), ("GEMINI_TIMEOUT_SECS", Some(bad))],
                Config::from_env,
            );
            match result {
                Err(Error::Config(msg)) => assert!(msg.contains("GEMINI_TIMEOUT_SECS")),
                other => panic!("expected config error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_transport_read_from_env() {
        let config = with_env(
            &[(API_KEY_VAR, Some("key")), ("PORT", Some("9090")), ("HOST", Some("127.0.0.1"))],
            Config::from_env,
        )
        .unwrap();
        assert_eq!(config.transport.address(), "127.0.0.1:9090");
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let gemini = GeminiConfig::new("super_secret_key");
        let debug_str = format!("{:?}", gemini);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.gemini.model, GeminiConfig::DEFAULT_MODEL);
        assert_eq!(config.transport.port, 8080);
        assert!(config.gemini.timeout_secs.is_none());
    }
}
