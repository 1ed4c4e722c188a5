//! The uniform result of running a tool.

use serde::{Deserialize, Serialize};

use super::error::ToolError;
use crate::domains::gateway::GenerationOutcome;

/// Why a tool produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The provider returned no content (safety block, empty candidate).
    Blocked,
    /// The provider call failed or its response was unusable.
    Provider,
    /// Unknown sub-action for a multi-action tool.
    InvalidAction,
    /// A required field was empty.
    MissingField,
}

/// Output of a tool call that was not rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolReply {
    /// Generated text.
    Answer(String),

    /// A failure reported in-band; `message` is the user-facing text.
    Failed { kind: FailureKind, message: String },
}

impl ToolReply {
    /// Create a failed reply.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failed {
            kind,
            message: message.into(),
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, Self::Answer(_))
    }

    /// The text shown to the user, answer or error alike.
    pub fn text(&self) -> &str {
        match self {
            Self::Answer(text) => text,
            Self::Failed { message, .. } => message,
        }
    }

    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Answer(_) => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl From<GenerationOutcome> for ToolReply {
    fn from(outcome: GenerationOutcome) -> Self {
        match outcome {
            GenerationOutcome::Text(text) => Self::Answer(text),
            blocked @ GenerationOutcome::Blocked { .. } => {
                Self::failure(FailureKind::Blocked, blocked.to_string())
            }
            error @ GenerationOutcome::Error(_) => {
                Self::failure(FailureKind::Provider, error.to_string())
            }
        }
    }
}

impl TryFrom<ToolError> for ToolReply {
    type Error = ToolError;

    /// In-band validation failures become replies; rejections are handed back.
    fn try_from(error: ToolError) -> Result<Self, Self::Error> {
        let kind = match &error {
            ToolError::InvalidAction(_) => FailureKind::InvalidAction,
            ToolError::MissingField(_) => FailureKind::MissingField,
            _ => return Err(error),
        };
        Ok(Self::failure(kind, format!("Error: {error}")))
    }
}
