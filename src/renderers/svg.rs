//! SVG renderer — draws a laid-out fishbone diagram as a standalone SVG.
//!
//! Node positions are top-left corners. Box sizes are fixed per kind; the
//! spine and ribs are straight lines, cause edges are cubic curves from the
//! parent's right handle to the child's left handle. Anchors are not drawn.

use super::Renderer;
use crate::error::Result;
use crate::layout::types::{Diagram, DiagramEdge, DiagramNode, DiagramNodeKind, EdgeStyle, Handle, Point};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_SIZE: f64 = 14.0;
const FONT_FAMILY: &str = "sans-serif";
const PADDING: f64 = 40.0;

const SPINE_STROKE: &str = r##"stroke="#1f2937" stroke-width="4""##;
const RIB_STROKE: &str = r##"stroke="#374151" stroke-width="2""##;
const CURVE_STROKE: &str = r##"fill="none" stroke="#6b7280" stroke-width="1.5""##;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Box size (width, height) drawn for each kind.
pub fn node_size(kind: DiagramNodeKind) -> (f64, f64) {
    match kind {
        DiagramNodeKind::Root => (200.0, 60.0),
        DiagramNodeKind::Branch => (160.0, 40.0),
        DiagramNodeKind::Cause => (150.0, 36.0),
        DiagramNodeKind::SubCause => (140.0, 32.0),
        DiagramNodeKind::Anchor => (0.0, 0.0),
    }
}

/// Absolute point of `handle` on `node`; anchors collapse to their position.
pub fn handle_point(node: &DiagramNode, handle: Option<Handle>) -> Point {
    let (w, h) = node_size(node.kind);
    let Point { x, y } = node.position;
    match handle {
        Some(Handle::Top) => Point::new(x + w / 2.0, y),
        Some(Handle::Bottom) => Point::new(x + w / 2.0, y + h),
        Some(Handle::Left) => Point::new(x, y + h / 2.0),
        Some(Handle::Right) => Point::new(x + w, y + h / 2.0),
        None => Point::new(x + w / 2.0, y + h / 2.0),
    }
}

fn node_fill(kind: DiagramNodeKind) -> (&'static str, &'static str) {
    match kind {
        DiagramNodeKind::Root => ("#b91c1c", "white"),
        DiagramNodeKind::Branch => ("#1d4ed8", "white"),
        DiagramNodeKind::Cause => ("#eff6ff", "#1e3a8a"),
        DiagramNodeKind::SubCause => ("#f9fafb", "#374151"),
        DiagramNodeKind::Anchor => ("none", "none"),
    }
}

// ── Shape rendering ───────────────────────────────────────────────────────────

fn render_node(node: &DiagramNode) -> String {
    let (w, h) = node_size(node.kind);
    let Point { x, y } = node.position;
    let (fill, text) = node_fill(node.kind);
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;
    let rx = if node.kind == DiagramNodeKind::Root { 8.0 } else { 4.0 };
    format!(
        r##"<g data-id="{id}"><rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{rx}" fill="{fill}" stroke="#111827" stroke-width="1"/>
<text x="{cx}" y="{cy}" dominant-baseline="central" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}" fill="{text}">{label}</text></g>"##,
        id = escape(node.id.as_str()),
        label = escape(&node.label),
    )
}

// ── Edge rendering ────────────────────────────────────────────────────────────

fn render_edge(edge: &DiagramEdge, diagram: &Diagram) -> Option<String> {
    let source = diagram.node(&edge.source)?;
    let target = diagram.node(&edge.target)?;
    let from = handle_point(source, edge.source_handle);
    let to = handle_point(target, edge.target_handle);
    let svg = match edge.style {
        EdgeStyle::Spine => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {SPINE_STROKE}/>"#,
            from.x, from.y, to.x, to.y
        ),
        EdgeStyle::Rib => format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {RIB_STROKE}/>"#,
            from.x, from.y, to.x, to.y
        ),
        EdgeStyle::Curved => {
            let mid = (from.x + to.x) / 2.0;
            format!(
                r#"<path d="M {} {} C {mid} {}, {mid} {}, {} {}" {CURVE_STROKE}/>"#,
                from.x, from.y, from.y, to.y, to.x, to.y
            )
        }
    };
    Some(svg)
}

/// Bounding box (min, max) over every node box.
fn bounds(diagram: &Diagram) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for node in &diagram.nodes {
        let (w, h) = node_size(node.kind);
        min.x = min.x.min(node.position.x);
        min.y = min.y.min(node.position.y);
        max.x = max.x.max(node.position.x + w);
        max.y = max.y.max(node.position.y + h);
    }
    (min, max)
}

// ── Renderer ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, diagram: &Diagram) -> Result<String> {
        if diagram.nodes.is_empty() {
            return Ok(String::new());
        }
        let (min, max) = bounds(diagram);
        let vx = min.x - PADDING;
        let vy = min.y - PADDING;
        let vw = max.x - min.x + 2.0 * PADDING;
        let vh = max.y - min.y + 2.0 * PADDING;

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{vw}" height="{vh}" viewBox="{vx} {vy} {vw} {vh}">"#
            ),
            format!(r#"<rect x="{vx}" y="{vy}" width="{vw}" height="{vh}" fill="white"/>"#),
        ];

        // Edges first so boxes sit on top of line ends.
        for edge in &diagram.edges {
            match render_edge(edge, diagram) {
                Some(svg) => parts.push(svg),
                None => tracing::warn!("skipping edge '{}' with a missing endpoint", edge.id),
            }
        }

        for node in diagram.cause_nodes() {
            parts.push(render_node(node));
        }

        parts.push("</svg>".to_string());
        Ok(parts.join("\n"))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
