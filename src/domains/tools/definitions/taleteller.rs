//! Taleteller: start, continue or end a story.

use serde::Deserialize;
use std::str::FromStr;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

/// What to do with the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryAction {
    New,
    Continue,
    End,
}

impl FromStr for StoryAction {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "continue" => Ok(Self::Continue),
            "end" => Ok(Self::End),
            _ => Err(ToolError::InvalidAction(TaletellerTool::TITLE)),
        }
    }
}

/// Parameters for the story tool.
#[derive(Debug, Clone, Deserialize)]
pub struct TaletellerParams {
    /// `new`, `continue` or `end`.
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default = "default_medium")]
    pub level: String,

    #[serde(default = "default_medium")]
    pub length: String,

    /// Story genre.
    #[serde(rename = "type", default = "default_genre")]
    pub genre: String,

    #[serde(default = "default_setting")]
    pub setting: String,

    #[serde(default = "default_characters")]
    pub characters: String,

    /// The story so far, for `continue` and `end`.
    #[serde(default)]
    pub current_story: String,
}

fn default_medium() -> String {
    "medium".to_string()
}

fn default_genre() -> String {
    "fantasy".to_string()
}

fn default_setting() -> String {
    "a mysterious forest".to_string()
}

fn default_characters() -> String {
    "a brave knight".to_string()
}

pub struct TaletellerTool;

impl ToolDefinition for TaletellerTool {
    const NAME: &'static str = "taleteller";
    const TITLE: &'static str = "Taleteller";
    const DESCRIPTION: &'static str =
        "Interactive story generator: start, continue or conclude a story";

    type Params = TaletellerParams;

    fn build_prompt(
        params: TaletellerParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let action: StoryAction = params.action.as_deref().unwrap_or_default().parse()?;

        let text = match action {
            StoryAction::New => format!(
                "Create a {} level, {} length story of the '{}' genre.\n\
                 Setting: {}\n\
                 Characters: {}\n\
                 Start the story now:",
                params.level, params.length, params.genre, params.setting, params.characters
            ),
            StoryAction::Continue => format!(
                "Continue the following story:\n\n{}\n\nContinue the narrative:",
                params.current_story
            ),
            StoryAction::End => format!(
                "Provide a satisfying conclusion to the following story:\n\n{}\n\nConclude the story:",
                params.current_story
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
    fn test_new_story_with_defaults() {
        let prompt = build::<TaletellerTool>(json!({ "action": "new" }), None).unwrap();
        assert!(
            prompt
                .text
                .starts_with("Create a medium level, medium length story of the 'fantasy' genre.")
        );
        assert!(prompt.text.contains("Setting: a mysterious forest"));
        assert!(prompt.text.contains("Characters: a brave knight"));
    }

    #[test]
    fn test_new_story_with_params() {
        let prompt = build::<TaletellerTool>(
            json!({ "action": "new", "type": "mystery", "setting": "a lighthouse", "level": "easy" }),
            None,
        )
        .unwrap();
        assert!(prompt.text.contains("easy level"));
        assert!(prompt.text.contains("'mystery' genre"));
        assert!(prompt.text.contains("Setting: a lighthouse"));
    }

    #[test]
    fn test_continue_and_end_embed_story() {
        let story = json!("Once upon a time, a fox found a key.");
        let cont = build::<TaletellerTool>(
            json!({ "action": "continue", "current_story": story }),
            None,
        )
        .unwrap();
        assert!(cont.text.contains("Once upon a time, a fox found a key."));
        assert!(cont.text.ends_with("Continue the narrative:"));

        let end =
            build::<TaletellerTool>(json!({ "action": "end", "current_story": story }), None)
                .unwrap();
        assert!(end.text.contains("Once upon a time, a fox found a key."));
        assert!(end.text.ends_with("Conclude the story:"));
    }

    #[test]
    fn test_unknown_or_missing_action() {
        for params in [json!({ "action": "rewrite" }), json!({})] {
            let result = build::<TaletellerTool>(params, None);
            assert!(matches!(result, Err(ToolError::InvalidAction("Taleteller"))));
        }
    }
}
