//! Domains module containing business logic organized by bounded contexts.
//!
//! - **gateway**: the single point of contact with the generative provider
//! - **tools**: the tool catalogue, prompt builders and dispatch
//! - **prompts**: transcript rendering and output post-processing

pub mod gateway;
pub mod prompts;
pub mod tools;
