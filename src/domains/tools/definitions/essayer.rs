//! Essayer: essay outlines and full essays.

use serde::Deserialize;
use std::str::FromStr;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EssayAction {
    Outline,
    Full,
}

impl FromStr for EssayAction {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outline" => Ok(Self::Outline),
            "full" => Ok(Self::Full),
            _ => Err(ToolError::InvalidAction(EssayerTool::TITLE)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EssayerParams {
    /// `outline` or `full`.
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub topic: String,

    /// Essay type, e.g. argumentative or expository.
    #[serde(rename = "type", default = "default_essay_type")]
    pub essay_type: String,
}

fn default_essay_type() -> String {
    "argumentative".to_string()
}

pub struct EssayerTool;

impl ToolDefinition for EssayerTool {
    const NAME: &'static str = "essayer";
    const TITLE: &'static str = "Essayer";
    const DESCRIPTION: &'static str = "Essay outline or full essay on a topic";

    type Params = EssayerParams;

    fn build_prompt(
        params: EssayerParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let action: EssayAction = params.action.as_deref().unwrap_or_default().parse()?;

        let text = match action {
            EssayAction::Outline => format!(
                "Generate a detailed outline for a/an '{}' essay on the topic: '{}'. \
                 The outline should include a thesis statement, main points for each body paragraph, \
                 and supporting ideas or evidence for each point.",
                params.essay_type, params.topic
            ),
            EssayAction::Full => format!(
                "Write a complete '{}' essay on the topic: '{}'. \
                 Ensure it has a clear introduction with a thesis statement, well-developed body paragraphs \
                 with supporting details/evidence, and a strong conclusion. \
                 Maintain the appropriate tone and structure for this essay type.",
                params.essay_type, params.topic
            ),
        };

        Ok(Prompt::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::build;
    use serde_json::json;

    #[test]
    fn test_outline() {
        let prompt = build::<EssayerTool>(
            json!({ "action": "outline", "topic": "remote work" }),
            None,
        )
        .unwrap();
        assert!(prompt.text.contains("outline for a/an 'argumentative' essay"));
        assert!(prompt.text.contains("'remote work'"));
        assert!(prompt.text.contains("thesis statement"));
    }

    #[test]
    fn test_full_with_type() {
        let prompt = build::<EssayerTool>(
            json!({ "action": "full", "topic": "tides", "type": "expository" }),
            None,
        )
        .unwrap();
        assert!(
            prompt
                .text
                .starts_with("Write a complete 'expository' essay on the topic: 'tides'.")
        );
    }

    #[test]
    fn test_invalid_action() {
        let result = build::<EssayerTool>(json!({ "action": "haiku" }), None);
        assert!(matches!(result, Err(ToolError::InvalidAction("Essayer"))));
    }
}
