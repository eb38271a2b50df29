//! WASM bindings for fishbone-layout.
//!
//! Exposes outline layout and an editing session to JavaScript via
//! wasm-bindgen. Diagrams and events cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::renderers::{JsonRenderer, Renderer};
use crate::{EditSession, LayoutConfig, NodeEvent, OutputFormat};

fn js_err(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

/// Lay out an outline and return the diagram as JSON.
#[wasm_bindgen(js_name = "layoutOutline")]
pub fn layout_outline(src: &str) -> Result<String, JsError> {
    crate::render_outline(src, OutputFormat::Json, &LayoutConfig::default()).map_err(js_err)
}

/// Lay out an outline and return it as SVG.
#[wasm_bindgen(js_name = "layoutOutlineSvg")]
pub fn layout_outline_svg(src: &str) -> Result<String, JsError> {
    crate::render_outline(src, OutputFormat::Svg, &LayoutConfig::default()).map_err(js_err)
}

/// Editing session handle for a canvas host.
#[wasm_bindgen(js_name = "FishboneSession")]
pub struct WasmSession {
    inner: EditSession,
}

#[wasm_bindgen(js_class = "FishboneSession")]
impl WasmSession {
    /// Session over the default dataset.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        WasmSession {
            inner: EditSession::seeded(),
        }
    }

    /// Session over a parsed outline.
    #[wasm_bindgen(js_name = "fromOutline")]
    pub fn from_outline(src: &str) -> Result<WasmSession, JsError> {
        let (tree, ids) = crate::parsers::parse(src).map_err(js_err)?;
        let inner = EditSession::with_ids(tree, ids, LayoutConfig::default()).map_err(js_err)?;
        Ok(WasmSession { inner })
    }

    /// Apply a JSON `NodeEvent`; returns the new child id for add-child events.
    pub fn dispatch(&mut self, event_json: &str) -> Result<Option<String>, JsError> {
        let event: NodeEvent = serde_json::from_str(event_json).map_err(js_err)?;
        Ok(self.inner.dispatch(event).map(|id| id.to_string()))
    }

    /// Current diagram as JSON.
    pub fn diagram(&self) -> Result<String, JsError> {
        JsonRenderer::new(false)
            .render(self.inner.diagram())
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = "resetLayout")]
    pub fn reset_layout(&mut self) {
        self.inner.reset_layout();
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}
