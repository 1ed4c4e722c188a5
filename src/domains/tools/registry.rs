//! Tool Registry - the closed set of tools and request dispatch.
//!
//! This module provides:
//! - `ToolKind`, one variant per tool
//! - `ToolRequest`, a validated inbound request
//! - `ToolRegistry`, which builds the prompt and calls the gateway

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

use super::definitions::{
    AdaTool, DictionaryTool, EssayerTool, GrammarMonsterTool, ObjectifierTool, ParaphraserTool,
    Prompt, ProsConsListerTool, ScenaristTool, SummarizerTool, TaletellerTool, TextCorrectorTool,
    ToolDefinition, TransexplainerTool, build,
};
use super::error::ToolError;
use super::reply::ToolReply;
use crate::domains::gateway::{Gateway, ImageAttachment};

// ============================================================================
// Tool Kind
// ============================================================================

/// Every tool the server offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Ada,
    Taleteller,
    Dictionary,
    TextCorrector,
    GrammarMonster,
    Essayer,
    Paraphraser,
    Summarizer,
    Transexplainer,
    Objectifier,
    Scenarist,
    ProsConsLister,
}

impl ToolKind {
    pub const ALL: [ToolKind; 12] = [
        Self::Ada,
        Self::Taleteller,
        Self::Dictionary,
        Self::TextCorrector,
        Self::GrammarMonster,
        Self::Essayer,
        Self::Paraphraser,
        Self::Summarizer,
        Self::Transexplainer,
        Self::Objectifier,
        Self::Scenarist,
        Self::ProsConsLister,
    ];

    /// Wire identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ada => AdaTool::NAME,
            Self::Taleteller => TaletellerTool::NAME,
            Self::Dictionary => DictionaryTool::NAME,
            Self::TextCorrector => TextCorrectorTool::NAME,
            Self::GrammarMonster => GrammarMonsterTool::NAME,
            Self::Essayer => EssayerTool::NAME,
            Self::Paraphraser => ParaphraserTool::NAME,
            Self::Summarizer => SummarizerTool::NAME,
            Self::Transexplainer => TransexplainerTool::NAME,
            Self::Objectifier => ObjectifierTool::NAME,
            Self::Scenarist => ScenaristTool::NAME,
            Self::ProsConsLister => ProsConsListerTool::NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Ada => AdaTool::DESCRIPTION,
            Self::Taleteller => TaletellerTool::DESCRIPTION,
            Self::Dictionary => DictionaryTool::DESCRIPTION,
            Self::TextCorrector => TextCorrectorTool::DESCRIPTION,
            Self::GrammarMonster => GrammarMonsterTool::DESCRIPTION,
            Self::Essayer => EssayerTool::DESCRIPTION,
            Self::Paraphraser => ParaphraserTool::DESCRIPTION,
            Self::Summarizer => SummarizerTool::DESCRIPTION,
            Self::Transexplainer => TransexplainerTool::DESCRIPTION,
            Self::Objectifier => ObjectifierTool::DESCRIPTION,
            Self::Scenarist => ScenaristTool::DESCRIPTION,
            Self::ProsConsLister => ProsConsListerTool::DESCRIPTION,
        }
    }

    pub fn requires_image(self) -> bool {
        match self {
            Self::Objectifier => ObjectifierTool::REQUIRES_IMAGE,
            _ => false,
        }
    }

    /// Build this tool's prompt from raw `prompt_data` parameters.
    pub fn build_prompt(
        self,
        params: serde_json::Value,
        image: Option<ImageAttachment>,
    ) -> Result<Prompt, ToolError> {
        match self {
            Self::Ada => build::<AdaTool>(params, image),
            Self::Taleteller => build::<TaletellerTool>(params, image),
            Self::Dictionary => build::<DictionaryTool>(params, image),
            Self::TextCorrector => build::<TextCorrectorTool>(params, image),
            Self::GrammarMonster => build::<GrammarMonsterTool>(params, image),
            Self::Essayer => build::<EssayerTool>(params, image),
            Self::Paraphraser => build::<ParaphraserTool>(params, image),
            Self::Summarizer => build::<SummarizerTool>(params, image),
            Self::Transexplainer => build::<TransexplainerTool>(params, image),
            Self::Objectifier => build::<ObjectifierTool>(params, image),
            Self::Scenarist => build::<ScenaristTool>(params, image),
            Self::ProsConsLister => build::<ProsConsListerTool>(params, image),
        }
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ToolError::unknown_tool(s))
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tool metadata for listing.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub requires_image: bool,
}

// ============================================================================
// Tool Request
// ============================================================================

/// A request whose parameters decoded and whose tool is known.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub tool: ToolKind,
    pub params: serde_json::Value,
    pub image: Option<ImageAttachment>,
}

impl ToolRequest {
    /// Validate raw form fields.
    ///
    /// `prompt_data` is decoded before the tool name is looked at, so a
    /// malformed payload is reported as such whatever the tool.
    pub fn parse(
        tool: Option<&str>,
        prompt_data: Option<&str>,
        image: Option<ImageAttachment>,
    ) -> Result<Self, ToolError> {
        let params = serde_json::from_str(prompt_data.unwrap_or("{}"))
            .map_err(ToolError::invalid_params)?;
        let tool = tool.unwrap_or_default().parse()?;

        Ok(Self {
            tool,
            params,
            image,
        })
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Dispatches tool requests to prompt builders and the gateway.
#[derive(Clone)]
pub struct ToolRegistry {
    gateway: Gateway,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Metadata for every tool.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        ToolKind::ALL
            .into_iter()
            .map(|kind| ToolInfo {
                name: kind.name(),
                description: kind.description(),
                requires_image: kind.requires_image(),
            })
            .collect()
    }

    /// Run one tool request.
    ///
    /// Returns `Err` only for requests that must be rejected; every other
    /// failure, provider failures included, comes back as a `ToolReply`.
    pub async fn handle(&self, request: ToolRequest) -> Result<ToolReply, ToolError> {
        let ToolRequest {
            tool,
            params,
            image,
        } = request;

        let prompt = match tool.build_prompt(params, image) {
            Ok(prompt) => prompt,
            Err(e) if e.is_rejection() => {
                warn!("Rejected {} request: {:?}", tool, e);
                return Err(e);
            }
            Err(e) => {
                info!("{} request not sent to the provider: {}", tool, e);
                return ToolReply::try_from(e);
            }
        };

        debug!("{} prompt built ({} chars)", tool, prompt.text.len());

        let outcome = self
            .gateway
            .generate(&prompt.text, prompt.image.as_ref())
            .await;

        Ok(ToolReply::from(outcome))
    }
}
