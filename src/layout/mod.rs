//! Layout engine — tree to positioned diagram, plus reconciliation.

pub mod fishbone;
pub mod graph;
pub mod reconcile;
pub mod types;

pub use fishbone::layout;
pub use graph::DiagramGraph;
pub use reconcile::reconcile;
pub use types::{Diagram, DiagramEdge, DiagramNode, DiagramNodeKind, EdgeStyle, Handle, Point};

use crate::config::LayoutConfig;
use crate::tree::CauseTree;

/// Lay out `tree` and carry over positions from `previous`.
pub fn relayout(tree: &CauseTree, previous: &Diagram, config: &LayoutConfig) -> Diagram {
    let fresh = layout(tree, config);
    Diagram {
        nodes: reconcile(&previous.nodes, fresh.nodes),
        edges: fresh.edges,
    }
}
