//! Grammar Monster: exhaustive explanation of a grammar topic.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrammarMonsterParams {
    #[serde(default)]
    pub topic: String,
}

pub struct GrammarMonsterTool;

impl ToolDefinition for GrammarMonsterTool {
    const NAME: &'static str = "grammar_monster";
    const TITLE: &'static str = "Grammar Monster";
    const DESCRIPTION: &'static str =
        "Thorough, structured explanation of an English grammar topic";

    type Params = GrammarMonsterParams;

    fn build_prompt(
        params: GrammarMonsterParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        Ok(Prompt::text(format!(
            "Explain the English grammar topic \"{}\" in a comprehensive and easy-to-understand way. \
             Cover all important aspects, rules, exceptions, and provide clear example sentences for each point. \
             Structure the explanation logically with clear headings. \
             Be the 'Grammar Monster' - thorough and detailed!",
            params.topic
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::build;
    use serde_json::json;

    #[test]
    fn test_topic_in_prompt() {
        let prompt =
            build::<GrammarMonsterTool>(json!({ "topic": "present perfect" }), None).unwrap();
        assert!(prompt.text.contains("\"present perfect\""));
        assert!(prompt.text.contains("clear headings"));
    }
}
