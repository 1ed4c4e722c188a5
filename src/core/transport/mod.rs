//! Transport layer for the tool server.
//!
//! A single HTTP transport: axum routes for the generation endpoint, the
//! tool catalogue, a health probe and the static front-end.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
