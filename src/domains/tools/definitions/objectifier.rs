//! Objectifier: describe the main object in an uploaded image.

use serde::Deserialize;

use super::{Prompt, ToolDefinition};
use crate::domains::gateway::ImageAttachment;
use crate::domains::tools::ToolError;

const PROMPT: &str = "Analyze this image and identify the main object(s) present. \
    Describe the primary object in detail, including its likely function, appearance, and any notable features.";

/// The tool takes no parameters; anything sent is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectifierParams {}

pub struct ObjectifierTool;

impl ToolDefinition for ObjectifierTool {
    const NAME: &'static str = "objectifier";
    const TITLE: &'static str = "Objectifier";
    const DESCRIPTION: &'static str = "Identify and describe the main object in an image";
    const REQUIRES_IMAGE: bool = true;

    type Params = ObjectifierParams;

    fn build_prompt(
        _params: ObjectifierParams,
        image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        let image = image.ok_or(ToolError::MissingImage(Self::TITLE))?;
        Ok(Prompt::with_image(PROMPT, image))
    }
}
