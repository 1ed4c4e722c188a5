//! Pros and cons lister.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProsConsListerParams {
    #[serde(default)]
    pub decision_topic: String,
}

pub struct ProsConsListerTool;

impl ToolDefinition for ProsConsListerTool {
    const NAME: &'static str = "pros_cons_lister";
    const TITLE: &'static str = "Pros and Cons Lister";
    const DESCRIPTION: &'static str =
        "At least three pros and three cons of a decision, each explained";

    type Params = ProsConsListerParams;

    fn build_prompt(
        params: ProsConsListerParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let topic = params.decision_topic.trim();
        if topic.is_empty() {
            return Err(ToolError::MissingField("a topic for the Pros and Cons list"));
        }

        let text = format!(
            r#"List the potential pros and cons of "{topic}".
Provide at least 3 pros and 3 cons.
For each pro and con, provide a brief explanation.
Structure your response clearly, for example:

**Pros:**
1.  **[Pro 1 Title/Summary]:** [Brief explanation]
2.  **[Pro 2 Title/Summary]:** [Brief explanation]
3.  **[Pro 3 Title/Summary]:** [Brief explanation]

**Cons:**
1.  **[Con 1 Title/Summary]:** [Brief explanation]
2.  **[Con 2 Title/Summary]:** [Brief explanation]
3.  **[Con 3 Title/Summary]:** [Brief explanation]
"#
        );

        Ok(Prompt::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::build;
    use serde_json::json;

    #[test]
    fn test_topic_is_trimmed() {
        let prompt = build::<ProsConsListerTool>(
            json!({ "decision_topic": "  moving to Lisbon \n" }),
            None,
        )
        .unwrap();
        assert!(
            prompt
                .text
                .starts_with("List the potential pros and cons of \"moving to Lisbon\".")
        );
        assert!(prompt.text.contains("at least 3 pros and 3 cons"));
    }

    #[test]
    fn test_blank_topic_is_missing_field() {
        for params in [json!({ "decision_topic": "   " }), json!({})] {
            let result = build::<ProsConsListerTool>(params, None);
            assert!(matches!(result, Err(ToolError::MissingField(_))));
        }
    }
}
