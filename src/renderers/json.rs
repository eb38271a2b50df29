//! JSON renderer: the node/edge lists exactly as the canvas consumes them.

use super::Renderer;
use crate::error::Result;
use crate::layout::types::Diagram;

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(diagram)?
        } else {
            serde_json::to_string(diagram)?
        };
        Ok(text)
    }
}
