//! Dictionary: a structured entry for a word or phrase.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

/// Section labels the model is asked to reproduce verbatim.
pub const SECTIONS: [&str; 7] = [
    "Pronunciation",
    "Definitions",
    "Synonyms",
    "Antonyms",
    "Etymology",
    "Example Sentences",
    "Turkish Meaning",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryParams {
    /// Word or phrase to look up.
    #[serde(default)]
    pub word: String,
}

pub struct DictionaryTool;

impl ToolDefinition for DictionaryTool {
    const NAME: &'static str = "dictionary";
    const TITLE: &'static str = "Dictionary";
    const DESCRIPTION: &'static str =
        "Dictionary entry with pronunciation, meanings, synonyms, etymology and a Turkish gloss";

    type Params = DictionaryParams;

    fn build_prompt(
        params: DictionaryParams,
        _image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let text = format!(
            r#"Provide a detailed dictionary entry for the word or phrase: "{word}"

Include the following sections clearly labeled EXACTLY as shown:
- {}: [Provide phonetic spelling or IPA here, e.g., /prəˌnʌnsiˈeɪʃən/ or pruh-nuhn-see-AY-shuhn]
- {}: [List all common meanings, numbered, with the part of speech for each]
- {}: [List several synonyms]
- {}: [List several antonyms, or state that there are none]
- {}: [Briefly explain the origin of the word]
- {}: [Give at least three example sentences using the word]
- {}: [Give the Turkish translation(s) of the word]
"#,
            SECTIONS[0],
            SECTIONS[1],
            SECTIONS[2],
            SECTIONS[3],
            SECTIONS[4],
            SECTIONS[5],
            SECTIONS[6],
            word = params.word,
        );

        Ok(Prompt::text(text))
    }
}
