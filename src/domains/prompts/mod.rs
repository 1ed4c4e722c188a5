//! Prompts domain module.
//!
//! Pure text helpers shared by the tools: flattening a caller-supplied
//! conversation into a prompt, and turning model markdown into the HTML
//! fragment the front end renders.

mod markup;
mod transcript;

pub use markup::render_html;
pub use transcript::{ConversationTurn, render_transcript};
