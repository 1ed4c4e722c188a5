//! Conversation transcript rendering.
//!
//! The server keeps no chat state: callers resend the whole history on
//! every request and it is flattened into a single prompt here.

use serde::{Deserialize, Serialize};

/// One prior turn supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// `"user"` or `"model"`.
    pub role: String,

    /// Text segments of the turn; only the first one is rendered.
    #[serde(default)]
    pub parts: Vec<String>,
}

impl ConversationTurn {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            parts: vec![text.into()],
        }
    }

    fn text(&self) -> &str {
        self.parts.first().map(String::as_str).unwrap_or_default()
    }
}

/// Flatten a conversation into prompt text.
///
/// Lines are, in order: the optional `preamble`, one `Role: text` line per
/// history turn, `User: {message}`, and finally `cue` on its own line.
pub fn render_transcript(
    preamble: Option<&str>,
    history: &[ConversationTurn],
    message: &str,
    cue: &str,
) -> String {
    let mut lines = Vec::with_capacity(history.len() + 3);
    lines.extend(preamble.map(str::to_string));
    lines.extend(
        history
            .iter()
            .map(|turn| format!("{}: {}", capitalize(&turn.role), turn.text())),
    );
    lines.push(format!("User: {message}"));
    lines.push(cue.to_string());
    lines.join("\n")
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
