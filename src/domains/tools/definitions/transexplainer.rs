//! Transexplainer: translation into English with an explanation.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

const TARGET_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Deserialize)]
pub struct TransexplainerParams {
    #[serde(default)]
    pub text: String,

    #[serde(default = "default_source_lang")]
    pub source_lang: String,
}

fn default_source_lang() -> String {
    "Turkish".to_string()
}

pub struct TransexplainerTool;

impl ToolDefinition for TransexplainerTool {
    const NAME: &'static str = "transexplainer";
    const TITLE: &'static str = "Transexplainer";
    const DESCRIPTION: &'static str =
        "Translate into English and explain tricky phrases and nuances";

    type Params = TransexplainerParams;

    fn build_prompt(
        params: TransexplainerParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let text = format!(
            r#"Translate the following text from {source} into {target}. After the translation, provide a detailed explanation of the translation process, focusing on tricky phrases, cultural nuances, or grammatical differences addressed.

Original Text ({source}):
"{text}"

{target} Translation:
[Your {target} translation here]

Explanation of Translation:
- [Point 1: Explain a specific word choice or grammar structure]
- [Point 2: Explain another nuance]
...
"#,
            source = params.source_lang,
            target = TARGET_LANGUAGE,
            text = params.text,
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
    fn test_default_source_language() {
        let prompt = build::<TransexplainerTool>(json!({ "text": "Merhaba" }), None).unwrap();
        assert!(prompt.text.starts_with("Translate the following text from Turkish into English."));
        assert!(prompt.text.contains("Original Text (Turkish):\n\"Merhaba\""));
    }

    #[test]
    fn test_explicit_source_language() {
        let prompt = build::<TransexplainerTool>(
            json!({ "text": "Hola", "source_lang": "Spanish" }),
            None,
        )
        .unwrap();
        assert!(prompt.text.contains("from Spanish into English"));
    }
}
