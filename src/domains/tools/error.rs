//! Tool-specific error types.

use thiserror::Error;

/// Errors detected before the provider is called.
///
/// Some of them reject the whole request (`is_rejection`), the others are
/// reported in-band as the tool's result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The `tool` field did not name a known tool.
    #[error("Invalid tool specified.")]
    UnknownTool(String),

    /// `prompt_data` was not JSON, or did not fit the tool's parameters.
    #[error("Invalid prompt data format.")]
    InvalidParams(String),

    /// An image tool was called without an image.
    #[error("No image file provided for {0}.")]
    MissingImage(&'static str),

    /// The tool's `action` parameter named no known sub-action.
    #[error("Invalid {0} action.")]
    InvalidAction(&'static str),

    /// A required text field was empty.
    #[error("Please enter {0}.")]
    MissingField(&'static str),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid params" error.
    pub fn invalid_params(detail: impl ToString) -> Self {
        Self::InvalidParams(detail.to_string())
    }

    /// Whether the request as a whole is malformed, as opposed to a
    /// validation failure reported in the tool's result.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_) | Self::InvalidParams(_) | Self::MissingImage(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            ToolError::unknown_tool("nope").to_string(),
            "Invalid tool specified."
        );
        assert_eq!(
            ToolError::invalid_params("expected value").to_string(),
            "Invalid prompt data format."
        );
        assert_eq!(
            ToolError::MissingImage("Objectifier").to_string(),
            "No image file provided for Objectifier."
        );
        assert_eq!(
            ToolError::InvalidAction("Taleteller").to_string(),
            "Invalid Taleteller action."
        );
    }

    #[test]
    fn test_rejection_split() {
        assert!(ToolError::unknown_tool("x").is_rejection());
        assert!(ToolError::MissingImage("Objectifier").is_rejection());
        assert!(!ToolError::InvalidAction("Essayer").is_rejection());
        assert!(!ToolError::MissingField("a topic").is_rejection());
    }
}
