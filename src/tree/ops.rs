//! The three tree mutations. Each returns a new tree and leaves its input
//! untouched; an unknown id returns the input unchanged.

use std::sync::Arc;

use super::{CauseNode, CauseTree, IdGenerator, NodeId};

/// Label given to a freshly added child.
pub const DEFAULT_CHILD_LABEL: &str = "Nguyên nhân mới";

/// Set the label of `id`. Every other node is shared with `tree`.
pub fn rename_node(tree: &CauseTree, id: &NodeId, label: &str) -> CauseTree {
    match rewrite(&tree.root, id, &mut |node: &CauseNode| {
        let mut node = node.clone();
        node.label = label.to_string();
        node
    }) {
        Some(root) => CauseTree { root },
        None => {
            tracing::debug!("rename_node: no node '{}'", id);
            tree.clone()
        }
    }
}

/// Append a placeholder child under `parent_id`.
///
/// Returns the new tree and the id of the added child, or the original tree
/// and `None` when the parent does not exist. The generator is only advanced
/// when a child is actually added.
pub fn add_child(
    tree: &CauseTree,
    parent_id: &NodeId,
    ids: &mut IdGenerator,
) -> (CauseTree, Option<NodeId>) {
    if !tree.contains(parent_id) {
        tracing::debug!("add_child: no parent '{}'", parent_id);
        return (tree.clone(), None);
    }
    ids.observe_tree(tree);
    let child_id = ids.next_id();
    let root = rewrite(&tree.root, parent_id, &mut |node: &CauseNode| {
        let mut node = node.clone();
        node.children
            .push(Arc::new(CauseNode::new(child_id.clone(), DEFAULT_CHILD_LABEL)));
        node
    });
    match root {
        Some(root) => (CauseTree { root }, Some(child_id)),
        None => (tree.clone(), None),
    }
}

/// Remove `id` and everything beneath it. The root cannot be deleted.
pub fn delete_subtree(tree: &CauseTree, id: &NodeId) -> CauseTree {
    if tree.root.id == *id {
        tracing::debug!("delete_subtree: refusing to delete root '{}'", id);
        return tree.clone();
    }
    match remove(&tree.root, id) {
        Some(root) => CauseTree { root },
        None => {
            tracing::debug!("delete_subtree: no node '{}'", id);
            tree.clone()
        }
    }
}

// ─── Path copying ────────────────────────────────────────────────────────────
//
// All helpers are iterative: a tree may be deeper than the call stack.

/// Apply `edit` to the node matching `id`, rebuilding only its ancestors.
/// `None` means `id` is not in the tree.
fn rewrite(
    root: &Arc<CauseNode>,
    id: &NodeId,
    edit: &mut dyn FnMut(&CauseNode) -> CauseNode,
) -> Option<Arc<CauseNode>> {
    let path = path_to(root, id)?;
    let (&target, ancestors) = path.split_last()?;
    let updated = Arc::new(edit(&**target));
    Some(rebuild_up(ancestors, target, updated))
}

/// Drop the node matching `id` from its parent. `None` for the root or an
/// unknown id.
fn remove(root: &Arc<CauseNode>, id: &NodeId) -> Option<Arc<CauseNode>> {
    let path = path_to(root, id)?;
    let (&target, ancestors) = path.split_last()?;
    let (&parent, above) = ancestors.split_last()?;
    let mut copy = CauseNode::clone(parent);
    copy.children.retain(|c| !Arc::ptr_eq(c, target));
    Some(rebuild_up(above, parent, Arc::new(copy)))
}

/// Nodes from the root down to `id`, both ends included.
fn path_to<'a>(root: &'a Arc<CauseNode>, id: &NodeId) -> Option<Vec<&'a Arc<CauseNode>>> {
    let mut stack: Vec<(&Arc<CauseNode>, usize)> = vec![(root, 0)];
    // path[d] is the last node visited at depth d; in pre-order that is
    // always the current node's ancestor.
    let mut path: Vec<&Arc<CauseNode>> = Vec::new();
    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        path.push(node);
        if node.id == *id {
            return Some(path);
        }
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }
    None
}

/// Swap `old` for `new` under the last of `ancestors`, then re-create each
/// ancestor bottom-up. Siblings off the path stay shared.
fn rebuild_up(
    ancestors: &[&Arc<CauseNode>],
    old: &Arc<CauseNode>,
    new: Arc<CauseNode>,
) -> Arc<CauseNode> {
    let mut old = old;
    let mut new = new;
    for &parent in ancestors.iter().rev() {
        let mut copy = CauseNode::clone(parent);
        if let Some(idx) = copy.children.iter().position(|c| Arc::ptr_eq(c, old)) {
            copy.children[idx] = new;
        }
        old = parent;
        new = Arc::new(copy);
    }
    new
}

#[cfg(test)]
#[path = "../../tests/rust/test_tree_ops.rs"]
mod tests;
