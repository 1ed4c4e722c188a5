//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the application server value and the
//! HTTP transport that exposes it.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ToolServer;
pub use transport::{HttpConfig, HttpTransport, TransportError};
