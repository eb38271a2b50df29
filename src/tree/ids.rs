//! Session-scoped id allocation.

use std::collections::HashSet;

use super::{CauseTree, NodeId};

pub const ID_PREFIX: &str = "cause-";

/// Issues `cause-<n>` ids from a monotonic counter.
///
/// Every id the generator has seen (seeded from a tree, or issued) stays in
/// `used` forever, so an id freed by a deletion is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
    used: HashSet<NodeId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that will never collide with any id in `tree`.
    pub fn for_tree(tree: &CauseTree) -> Self {
        let mut ids = Self::new();
        ids.observe_tree(tree);
        ids
    }

    /// Mark an externally assigned id as taken.
    pub fn observe(&mut self, id: &NodeId) {
        self.used.insert(id.clone());
    }

    pub fn observe_tree(&mut self, tree: &CauseTree) {
        for id in tree.ids() {
            self.used.insert(id);
        }
    }

    pub fn is_used(&self, id: &NodeId) -> bool {
        self.used.contains(id)
    }

    pub fn next_id(&mut self) -> NodeId {
        loop {
            self.next += 1;
            let candidate = NodeId::new(format!("{ID_PREFIX}{}", self.next));
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
