//! Summarizer.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizerParams {
    #[serde(default)]
    pub text: String,
}

pub struct SummarizerTool;

impl ToolDefinition for SummarizerTool {
    const NAME: &'static str = "summarizer";
    const TITLE: &'static str = "Summarizer";
    const DESCRIPTION: &'static str = "Concise summary with the key points in bold";

    type Params = SummarizerParams;

    fn build_prompt(
        params: SummarizerParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let text = format!(
            r#"Summarize the following text concisely. Identify and present the **main key points in bold**.

Original Text:
"{}"

Summary:
[Your summary here with **key points** highlighted]
"#,
            params.text
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
    fn test_prompt_asks_for_bold_key_points() {
        let prompt = build::<SummarizerTool>(json!({ "text": "Long article." }), None).unwrap();
        assert!(prompt.text.contains("\"Long article.\""));
        assert!(prompt.text.contains("**main key points in bold**"));
    }
}
