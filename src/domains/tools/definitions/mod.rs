//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - Metadata (wire name, description)
//! - A typed parameters struct decoded from `prompt_data`
//! - The prompt builder
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Add a `ToolKind` variant in `registry.rs`; the compiler points at
//!    every match that needs an arm

use serde::de::DeserializeOwned;

use super::error::ToolError;
use crate::domains::gateway::ImageAttachment;

mod ada;
mod dictionary;
mod essayer;
mod grammar_monster;
mod objectifier;
mod paraphraser;
mod pros_cons_lister;
mod scenarist;
mod summarizer;
mod taleteller;
mod text_corrector;
mod transexplainer;

pub use ada::{AdaParams, AdaTool};
pub use dictionary::{DictionaryParams, DictionaryTool};
pub use essayer::{EssayAction, EssayerParams, EssayerTool};
pub use grammar_monster::{GrammarMonsterParams, GrammarMonsterTool};
pub use objectifier::{ObjectifierParams, ObjectifierTool};
pub use paraphraser::{ParaphraserParams, ParaphraserTool};
pub use pros_cons_lister::{ProsConsListerParams, ProsConsListerTool};
pub use scenarist::{ScenaristParams, ScenaristTool};
pub use summarizer::{SummarizerParams, SummarizerTool};
pub use taleteller::{StoryAction, TaletellerParams, TaletellerTool};
pub use text_corrector::{TextCorrectorParams, TextCorrectorTool};
pub use transexplainer::{TransexplainerParams, TransexplainerTool};

/// A finished prompt, ready for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub image: Option<ImageAttachment>,
}

impl Prompt {
    /// A text-only prompt.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    /// A prompt sent together with an image.
    pub fn with_image(text: impl Into<String>, image: ImageAttachment) -> Self {
        Self {
            text: text.into(),
            image: Some(image),
        }
    }
}

/// Trait for tool definitions.
///
/// Each tool turns its decoded parameters into exactly one prompt, or a
/// `ToolError` when validation fails before the provider is involved.
pub trait ToolDefinition {
    /// The wire identifier sent in the `tool` form field.
    const NAME: &'static str;

    /// The name shown to users, e.g. in error messages.
    const TITLE: &'static str;

    /// A description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Whether the request must carry an image.
    const REQUIRES_IMAGE: bool = false;

    /// Parameters decoded from `prompt_data`.
    type Params: DeserializeOwned;

    /// Build the prompt. `image` is the uploaded attachment, if any.
    fn build_prompt(
        params: Self::Params,
        image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError>;
}

/// Decode `params` for `T` and build its prompt.
///
/// The image requirement is checked first so an image tool without an
/// upload is always rejected the same way, whatever its parameters.
pub fn build<T: ToolDefinition>(
    params: serde_json::Value,
    image: Option<ImageAttachment>,
) -> Result<Prompt, ToolError> {
    if T::REQUIRES_IMAGE && image.is_none() {
        return Err(ToolError::MissingImage(T::TITLE));
    }

    let params: T::Params = serde_json::from_value(params).map_err(ToolError::invalid_params)?;
    T::build_prompt(params, image)
}
