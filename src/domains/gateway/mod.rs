//! Generation gateway domain.
//!
//! Everything that talks to the generative provider lives here.
//!
//! ## Architecture
//!
//! - `model.rs` - Wire types for `generateContent`
//! - `client.rs` - `GenerativeModel` seam and the reqwest-based Gemini client
//! - `service.rs` - `Gateway`, which turns any provider result into a `GenerationOutcome`
//! - `error.rs` - Provider error types

mod client;
mod error;
mod model;
mod service;

pub use client::{GeminiClient, GenerativeModel};
pub use error::ProviderError;
pub use model::{
    Candidate, Content, GenerateRequest, GenerateResponse, ImageAttachment, InlineData, Part,
    PromptFeedback, SafetyRating,
};
pub use service::{Gateway, GenerationOutcome};

#[cfg(test)]
pub(crate) use service::testing;
