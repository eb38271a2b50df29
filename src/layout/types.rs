//! Diagram projection types handed to the canvas.
//!
//! These are caches derived from a `CauseTree`; they are regenerated on every
//! mutation and never edited as a source of truth.

use serde::{Deserialize, Serialize};

use crate::tree::{NodeId, NodeKind};

// ─── Constants ────────────────────────────────────────────────────────────────

/// Id of the zero-size node at the left end of the spine.
pub const TAIL_ID: &str = "__tail";
/// Prefix for the invisible spine anchors each branch's rib attaches to.
pub const ANCHOR_PREFIX: &str = "__anchor_";
pub const SPINE_EDGE_ID: &str = "e-spine";

pub fn anchor_id(branch: &NodeId) -> NodeId {
    NodeId::new(format!("{ANCHOR_PREFIX}{branch}"))
}

pub fn is_anchor_id(id: &NodeId) -> bool {
    id.as_str() == TAIL_ID || id.as_str().starts_with(ANCHOR_PREFIX)
}

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ─── Handle / kinds / style ──────────────────────────────────────────────────

/// Connection point on a node's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramNodeKind {
    Root,
    Branch,
    Cause,
    SubCause,
    /// Invisible, zero-size edge endpoint on the spine.
    Anchor,
}

impl From<NodeKind> for DiagramNodeKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Root => DiagramNodeKind::Root,
            NodeKind::Branch => DiagramNodeKind::Branch,
            NodeKind::Cause => DiagramNodeKind::Cause,
            NodeKind::SubCause => DiagramNodeKind::SubCause,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Tail anchor to root.
    Spine,
    /// Branch to its spine anchor.
    Rib,
    /// Parent to child below the branch level.
    Curved,
}

// ─── DiagramNode ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: NodeId,
    pub position: Point,
    pub label: String,
    pub kind: DiagramNodeKind,
}

impl DiagramNode {
    pub fn new(
        id: NodeId,
        position: Point,
        label: impl Into<String>,
        kind: DiagramNodeKind,
    ) -> Self {
        Self {
            id,
            position,
            label: label.into(),
            kind,
        }
    }

    pub fn anchor(id: NodeId, position: Point) -> Self {
        Self::new(id, position, String::new(), DiagramNodeKind::Anchor)
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == DiagramNodeKind::Anchor
    }
}

// ─── DiagramEdge ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramEdge {
    pub id: String,
    #[serde(rename = "sourceId")]
    pub source: NodeId,
    #[serde(rename = "targetId")]
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<Handle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<Handle>,
    pub style: EdgeStyle,
}

impl DiagramEdge {
    pub fn new(id: impl Into<String>, source: NodeId, target: NodeId, style: EdgeStyle) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            source_handle: None,
            target_handle: None,
            style,
        }
    }

    pub fn with_handles(mut self, source: Option<Handle>, target: Option<Handle>) -> Self {
        self.source_handle = source;
        self.target_handle = target;
        self
    }
}

// ─── Diagram ──────────────────────────────────────────────────────────────────

/// The full output of a layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &NodeId) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut DiagramNode> {
        self.nodes.iter_mut().find(|n| n.id == *id)
    }

    pub fn position_of(&self, id: &NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    pub fn edges_from<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a DiagramEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == *id)
    }

    /// Nodes that carry a cause tree entry (everything but anchors).
    pub fn cause_nodes(&self) -> impl Iterator<Item = &DiagramNode> {
        self.nodes.iter().filter(|n| !n.is_anchor())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
