//! Paraphraser: three rephrasings per requested style.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

#[derive(Debug, Clone, Deserialize)]
pub struct ParaphraserParams {
    #[serde(default)]
    pub text: String,

    /// Style names, e.g. `formal`, `simpler`, `casual`.
    #[serde(default = "default_styles")]
    pub styles: Vec<String>,
}

fn default_styles() -> Vec<String> {
    vec!["formal".to_string(), "simpler".to_string()]
}

pub struct ParaphraserTool;

impl ToolDefinition for ParaphraserTool {
    const NAME: &'static str = "paraphraser";
    const TITLE: &'static str = "Paraphraser";
    const DESCRIPTION: &'static str = "Rephrase text in several styles, three variants each";

    type Params = ParaphraserParams;

    fn build_prompt(
        params: ParaphraserParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let text = format!(
            r#"Rephrase the following text into the specified styles. For each style, provide exactly 3 distinct rephrased sentences.

Original Text:
"{}"

Rephrase into these styles: {}

Format the output clearly for each style:

**Style: [Style Name 1]**
1. [Sentence 1]
2. [Sentence 2]
3. [Sentence 3]

**Style: [Style Name 2]**
1. [Sentence 1]
2. [Sentence 2]
3. [Sentence 3]
...
"#,
            params.text,
            params.styles.join(", ")
        );

        Ok(Prompt::text(text))
    }
}
