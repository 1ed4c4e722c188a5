//! Text corrector: corrected text plus per-correction feedback.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextCorrectorParams {
    #[serde(default)]
    pub text: String,
}

pub struct TextCorrectorTool;

impl ToolDefinition for TextCorrectorTool {
    const NAME: &'static str = "text_corrector";
    const TITLE: &'static str = "Text Corrector";
    const DESCRIPTION: &'static str = "Correct English text and explain every correction";

    type Params = TextCorrectorParams;

    fn build_prompt(
        params: TextCorrectorParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let text = format!(
            r#"Please correct the following English text for grammar, spelling, punctuation, and style.
After the corrected text, provide a detailed, bulleted list explaining *each* correction made and why it was necessary.

Original Text:
"{}"

Corrected Text:
[Your corrected version here]

Feedback:
- [Explanation for correction 1]
- [Explanation for correction 2]
...
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
    fn test_prompt_quotes_text() {
        let prompt = build::<TextCorrectorTool>(json!({ "text": "i has a apple" }), None).unwrap();
        assert!(prompt.text.contains("\"i has a apple\""));
        assert!(prompt.text.contains("Corrected Text:"));
        assert!(prompt.text.contains("Feedback:"));
    }
}
