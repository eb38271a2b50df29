//! Position reconciliation between consecutive layouts.
//!
//! Runs after `layout()`: any node already on screen keeps the position it
//! had, so an edit in one branch does not shift the rest of the diagram.

use std::collections::HashMap;

use crate::tree::NodeId;

use super::types::{DiagramNode, Point};

/// Merge a fresh layout with the previous render, keyed by id.
///
/// Nodes present in both lists take the old position; new nodes keep their
/// computed one. Output order follows `fresh`.
pub fn reconcile(previous: &[DiagramNode], fresh: Vec<DiagramNode>) -> Vec<DiagramNode> {
    let kept: HashMap<&NodeId, Point> = previous.iter().map(|n| (&n.id, n.position)).collect();
    fresh
        .into_iter()
        .map(|mut node| {
            if let Some(position) = kept.get(&node.id) {
                node.position = *position;
            }
            node
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_reconcile.rs"]
mod tests;
