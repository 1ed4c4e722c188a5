//! Gemini Tools Server Library
//!
//! A small web backend exposing a family of text-generation tools (chat,
//! role-play, stories, essays, dictionary, proofreading, summaries,
//! paraphrases, translation, image description, pros and cons) backed by
//! the Gemini generative API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server value and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **gateway**: the Gemini client and outcome normalization
//!   - **tools**: tool catalogue, prompt builders and dispatch
//!   - **prompts**: transcript rendering and HTML post-processing
//!
//! # Example
//!
//! ```rust,no_run
//! use gemini_tools_server::core::{Config, HttpTransport, ToolServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = HttpTransport::new(config.transport.clone());
//!     let server = ToolServer::new(config)?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
