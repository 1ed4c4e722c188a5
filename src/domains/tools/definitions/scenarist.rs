//! Scenarist: role-play chat with a persona.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::prompts::{ConversationTurn, render_transcript};
use crate::domains::tools::ToolError;

/// Parameters for a role-play turn.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenaristParams {
    #[serde(default = "default_character")]
    pub character: String,

    #[serde(default = "default_scenario")]
    pub scenario: String,

    #[serde(default)]
    pub history: Vec<ConversationTurn>,

    #[serde(default)]
    pub message: String,
}

fn default_character() -> String {
    "a helpful librarian".to_string()
}

fn default_scenario() -> String {
    "in a quiet library".to_string()
}

pub struct ScenaristTool;

impl ToolDefinition for ScenaristTool {
    const NAME: &'static str = "scenarist";
    const TITLE: &'static str = "Scenarist";
    const DESCRIPTION: &'static str = "Role-play conversation with a chosen character and scenario";

    type Params = ScenaristParams;

    fn build_prompt(
        params: ScenaristParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let persona = format!(
            "You are now acting as '{}' {}. Respond to the user's messages strictly in this role. \
             Maintain the persona's likely knowledge, tone, and way of speaking. Do not break character.",
            params.character, params.scenario
        );
        let cue = format!("Model ({}):", params.character);

        Ok(Prompt::text(render_transcript(
            Some(&persona),
            &params.history,
            &params.message,
            &cue,
        )))
    }
}
