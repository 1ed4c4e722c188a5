//! Tools domain module.
//!
//! A tool is one text-generation feature (chat, story, dictionary...). Each
//! turns the caller's parameters into a single prompt for the gateway.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool prompt builders (one file per tool)
//! - `registry.rs` - `ToolKind` enumeration, request validation and dispatch
//! - `reply.rs` - Uniform tool result, answer or in-band failure
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` and implement `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolKind` variant in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod reply;

pub use definitions::{Prompt, ToolDefinition};
pub use error::ToolError;
pub use registry::{ToolInfo, ToolKind, ToolRegistry, ToolRequest};
pub use reply::{FailureKind, ToolReply};
