//! Cause tree: the single source of truth for a fishbone diagram.
//!
//! Trees are persistent. Every node sits behind an `Arc`, and the mutation
//! functions in [`ops`] path-copy: only the ancestors of the changed node
//! are rebuilt, untouched subtrees are shared between versions.

pub mod ids;
pub mod ops;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use ids::IdGenerator;
pub use ops::{DEFAULT_CHILD_LABEL, add_child, delete_subtree, rename_node};

// ─── NodeId ──────────────────────────────────────────────────────────────────

/// Stable node identifier. Assigned once, never reused within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ─── NodeKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Root,
    Branch,
    Cause,
    SubCause,
}

impl NodeKind {
    /// Kind is a function of depth alone: causes and sub-causes alternate
    /// from depth 2 onward.
    pub fn at_depth(depth: usize) -> Self {
        match depth {
            0 => NodeKind::Root,
            1 => NodeKind::Branch,
            d if d % 2 == 0 => NodeKind::Cause,
            _ => NodeKind::SubCause,
        }
    }
}

// ─── CauseNode ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CauseNode {
    pub id: NodeId,
    pub label: String,
    /// Insertion order decides placement.
    #[serde(default)]
    pub children: Vec<Arc<CauseNode>>,
}

impl CauseNode {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<CauseNode>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// The derived drop would recurse once per level. Unlink uniquely owned
// children onto a heap stack instead; shared ones just lose a refcount.
impl Drop for CauseNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                pending.append(&mut node.children);
            }
        }
    }
}

// ─── CauseTree ───────────────────────────────────────────────────────────────

/// A rooted cause tree. Cloning is cheap: it bumps the root's refcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CauseTree {
    pub root: Arc<CauseNode>,
}

impl CauseTree {
    pub fn new(root: CauseNode) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root.id
    }

    /// Pre-order walk yielding `(node, depth)`, children in order.
    pub fn walk(&self) -> Vec<(&CauseNode, usize)> {
        let mut out = Vec::new();
        let mut stack: Vec<(&CauseNode, usize)> = vec![(self.root.as_ref(), 0)];
        while let Some((node, depth)) = stack.pop() {
            out.push((node, depth));
            for child in node.children.iter().rev() {
                stack.push((child.as_ref(), depth + 1));
            }
        }
        out
    }

    pub fn find(&self, id: &NodeId) -> Option<&CauseNode> {
        self.walk()
            .into_iter()
            .find(|(node, _)| node.id == *id)
            .map(|(node, _)| node)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    pub fn depth_of(&self, id: &NodeId) -> Option<usize> {
        self.walk()
            .into_iter()
            .find(|(node, _)| node.id == *id)
            .map(|(_, depth)| depth)
    }

    pub fn kind_of(&self, id: &NodeId) -> Option<NodeKind> {
        self.depth_of(id).map(NodeKind::at_depth)
    }

    pub fn parent_of(&self, id: &NodeId) -> Option<&CauseNode> {
        self.walk()
            .into_iter()
            .map(|(node, _)| node)
            .find(|node| node.children.iter().any(|c| c.id == *id))
    }

    /// All ids in pre-order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.walk().into_iter().map(|(n, _)| n.id.clone()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.walk().len()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_tree.rs"]
mod tests;
