//! Editing session: owns the current tree and the last rendered diagram.
//!
//! Each mutation runs mutate → layout → reconcile → store. The canvas talks
//! to the session through [`NodeEvent`]s instead of per-node callbacks.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::{FishboneError, Result};
use crate::layout::types::is_anchor_id;
use crate::layout::{self, Diagram, Point};
use crate::seed;
use crate::tree::{self, CauseTree, IdGenerator, NodeId};

/// What the user did to a node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum NodeAction {
    Rename(String),
    AddChild,
    Delete,
    /// The node was dragged to a new position.
    Moved(Point),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeEvent {
    pub node_id: NodeId,
    pub action: NodeAction,
}

impl NodeEvent {
    pub fn new(node_id: impl Into<NodeId>, action: NodeAction) -> Self {
        Self {
            node_id: node_id.into(),
            action,
        }
    }
}

#[derive(Debug)]
pub struct EditSession {
    tree: CauseTree,
    ids: IdGenerator,
    config: LayoutConfig,
    diagram: Diagram,
}

impl EditSession {
    /// Fails if `tree` has duplicate ids or uses ids reserved for spine
    /// anchors, or if `config` does not validate.
    pub fn new(tree: CauseTree, config: LayoutConfig) -> Result<Self> {
        let ids = IdGenerator::for_tree(&tree);
        Self::with_ids(tree, ids, config)
    }

    /// Start from a tree whose ids came out of `ids` (e.g. a parsed outline).
    pub fn with_ids(tree: CauseTree, ids: IdGenerator, config: LayoutConfig) -> Result<Self> {
        check_tree(&tree)?;
        config.validate()?;
        Ok(Self::start(tree, ids, config))
    }

    /// Session over the default 6M dataset.
    pub fn seeded() -> Self {
        let tree = seed::default_tree();
        let ids = IdGenerator::for_tree(&tree);
        Self::start(tree, ids, LayoutConfig::default())
    }

    fn start(tree: CauseTree, mut ids: IdGenerator, config: LayoutConfig) -> Self {
        ids.observe_tree(&tree);
        let diagram = layout::layout(&tree, &config);
        tracing::debug!(
            nodes = tree.node_count(),
            "edit session started with root '{}'",
            tree.root_id()
        );
        Self {
            tree,
            ids,
            config,
            diagram,
        }
    }

    pub fn tree(&self) -> &CauseTree {
        &self.tree
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn rename(&mut self, id: &NodeId, label: &str) {
        let next = tree::rename_node(&self.tree, id, label);
        self.commit(next);
    }

    /// Returns the new child's id, or `None` for an unknown parent.
    pub fn add_child(&mut self, parent_id: &NodeId) -> Option<NodeId> {
        let (next, child) = tree::add_child(&self.tree, parent_id, &mut self.ids);
        self.commit(next);
        child
    }

    pub fn delete(&mut self, id: &NodeId) {
        let next = tree::delete_subtree(&self.tree, id);
        self.commit(next);
    }

    /// Record a drag. Later relayouts keep this position.
    pub fn move_node(&mut self, id: &NodeId, position: Point) {
        if !position.is_finite() {
            tracing::debug!("move_node: ignoring non-finite position for '{}'", id);
            return;
        }
        match self.diagram.node_mut(id) {
            Some(node) => node.position = position,
            None => tracing::debug!("move_node: no diagram node '{}'", id),
        }
    }

    /// Route a canvas event to the matching mutation.
    pub fn dispatch(&mut self, event: NodeEvent) -> Option<NodeId> {
        tracing::debug!(node = %event.node_id, action = ?event.action, "dispatch");
        match event.action {
            NodeAction::Rename(label) => {
                self.rename(&event.node_id, &label);
                None
            }
            NodeAction::AddChild => self.add_child(&event.node_id),
            NodeAction::Delete => {
                self.delete(&event.node_id);
                None
            }
            NodeAction::Moved(position) => {
                self.move_node(&event.node_id, position);
                None
            }
        }
    }

    /// Forget every remembered position and lay out from scratch.
    pub fn reset_layout(&mut self) {
        self.diagram = layout::layout(&self.tree, &self.config);
    }

    /// Swap geometry and re-run the layout from scratch. An invalid config
    /// is rejected and the current one stays.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.reset_layout();
        Ok(())
    }

    fn commit(&mut self, next: CauseTree) {
        // Unknown ids hand back the same root.
        if Arc::ptr_eq(&next.root, &self.tree.root) {
            return;
        }
        self.diagram = layout::relayout(&next, &self.diagram, &self.config);
        self.tree = next;
    }
}

/// Every id must be unique and must not collide with the layout's own
/// anchor ids, or two diagram nodes would share an id.
fn check_tree(tree: &CauseTree) -> Result<()> {
    let mut seen = HashSet::new();
    for (node, _) in tree.walk() {
        if is_anchor_id(&node.id) {
            return Err(FishboneError::InvalidTree(format!(
                "id '{}' is reserved for spine anchors",
                node.id
            )));
        }
        if !seen.insert(&node.id) {
            return Err(FishboneError::InvalidTree(format!(
                "id '{}' appears more than once",
                node.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/rust/test_session.rs"]
mod tests;
