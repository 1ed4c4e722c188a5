//! Error types and handling for the tools server.
//!
//! This module defines the error type for failures that stop the server
//! from starting. Per-request failures are modelled in their own domains
//! and never reach this type; listener failures are `TransportError`s.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Startup error for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider client could not be built.
    #[error("Provider error: {0}")]
    Provider(#[from] crate::domains::gateway::ProviderError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
