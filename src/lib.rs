//! fishbone-layout — cause-tree to fishbone (Ishikawa) diagram layout.
//!
//! Public API: `render_outline()`, plus the pieces it wires together:
//! tree mutations, `layout()`, `reconcile()` and the `EditSession`.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod seed;
pub mod session;
pub mod tree;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::LayoutConfig;
pub use error::{FishboneError, Result};
pub use layout::{Diagram, DiagramEdge, DiagramNode, layout, reconcile};
pub use renderers::{OutputFormat, Renderer};
pub use session::{EditSession, NodeAction, NodeEvent};
pub use tree::{CauseNode, CauseTree, IdGenerator, NodeId, NodeKind};

/// Lay out `tree` and render it in `format`.
pub fn render_tree(tree: &CauseTree, format: OutputFormat, config: &LayoutConfig) -> Result<String> {
    let diagram = layout(tree, config);
    format.renderer().render(&diagram)
}

/// Parse an outline, lay it out and render it.
pub fn render_outline(src: &str, format: OutputFormat, config: &LayoutConfig) -> Result<String> {
    let (tree, _) = parsers::parse(src)?;
    render_tree(&tree, format, config)
}
