//! Ada: free-form chat.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::prompts::{ConversationTurn, render_transcript};
use crate::domains::tools::ToolError;

/// Parameters for a chat turn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdaParams {
    /// Every earlier turn, oldest first.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,

    /// The new user message.
    #[serde(default)]
    pub message: String,
}

pub struct AdaTool;

impl ToolDefinition for AdaTool {
    const NAME: &'static str = "ada";
    const TITLE: &'static str = "Ada";
    const DESCRIPTION: &'static str = "Free-form chat assistant";

    type Params = AdaParams;

    fn build_prompt(
        params: AdaParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        Ok(Prompt::text(render_transcript(
            None,
            &params.history,
            &params.message,
            "Model:",
        )))
    }
}
