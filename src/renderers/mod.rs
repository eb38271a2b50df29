//! Renderer trait and output formats.

pub mod json;
pub mod svg;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use std::str::FromStr;

use crate::error::{FishboneError, Result};
use crate::layout::types::Diagram;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out diagram to a string.
    fn render(&self, diagram: &Diagram) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Svg,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer::default()),
            OutputFormat::Svg => Box::new(SvgRenderer::new()),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FishboneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(FishboneError::UnknownFormat(other.to_string())),
        }
    }
}
