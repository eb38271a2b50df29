//! DiagramGraph — a petgraph DiGraph view of a laid-out diagram.
//!
//! Used to check structure after edits: every edge endpoint exists, the
//! diagram is acyclic, and every cause node hangs off the spine.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, Reversed};

use crate::tree::NodeId;

use super::types::{Diagram, DiagramNodeKind, EdgeStyle};

/// Node data stored in the petgraph DiGraph.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub id: NodeId,
    pub kind: DiagramNodeKind,
}

pub struct DiagramGraph {
    pub digraph: DiGraph<NodeData, EdgeStyle>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<NodeId, NodeIndex>,
    /// Edges whose source or target is not a diagram node: `(edge id, missing id)`.
    pub dangling: Vec<(String, NodeId)>,
}

impl DiagramGraph {
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let mut digraph: DiGraph<NodeData, EdgeStyle> = DiGraph::new();
        let mut node_index: HashMap<NodeId, NodeIndex> = HashMap::new();
        let mut dangling = Vec::new();

        for node in &diagram.nodes {
            if !node_index.contains_key(&node.id) {
                let idx = digraph.add_node(NodeData {
                    id: node.id.clone(),
                    kind: node.kind,
                });
                node_index.insert(node.id.clone(), idx);
            }
        }

        for edge in &diagram.edges {
            let from = node_index.get(&edge.source);
            let to = node_index.get(&edge.target);
            match (from, to) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, edge.style);
                }
                (None, _) => dangling.push((edge.id.clone(), edge.source.clone())),
                (_, None) => dangling.push((edge.id.clone(), edge.target.clone())),
            }
        }

        Self {
            digraph,
            node_index,
            dangling,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns true if the graph is a directed acyclic graph (no cycles).
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    pub fn in_degree(&self, id: &NodeId) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    pub fn out_degree(&self, id: &NodeId) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }

    /// Ids of nodes with no path to the spine.
    ///
    /// Rib anchors sit on the spine without an edge to it, so the root and
    /// every anchor seed the search, which then runs on the undirected shape.
    pub fn orphans(&self) -> Vec<NodeId> {
        let mut seen = vec![false; self.digraph.node_count()];
        let mut frontier: Vec<NodeIndex> = self
            .digraph
            .node_indices()
            .filter(|&idx| {
                matches!(
                    self.digraph[idx].kind,
                    DiagramNodeKind::Root | DiagramNodeKind::Anchor
                )
            })
            .collect();
        for idx in &frontier {
            seen[idx.index()] = true;
        }
        while let Some(idx) = frontier.pop() {
            for next in self.digraph.neighbors_undirected(idx) {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    frontier.push(next);
                }
            }
        }
        self.digraph
            .node_indices()
            .filter(|idx| !seen[idx.index()])
            .map(|idx| self.digraph[idx].id.clone())
            .collect()
    }

    /// Every node reachable downstream of `id` along edge direction. For a
    /// branch this includes its rib anchor.
    pub fn descendants(&self, id: &NodeId) -> Vec<NodeId> {
        let Some(&start) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut bfs = Bfs::new(&self.digraph, start);
        let mut out = Vec::new();
        while let Some(idx) = bfs.next(&self.digraph) {
            if idx != start {
                out.push(self.digraph[idx].id.clone());
            }
        }
        out
    }

    /// Ids upstream of `id`, following edges backwards. For a cause this
    /// ends at its branch.
    pub fn ancestors(&self, id: &NodeId) -> Vec<NodeId> {
        let Some(&start) = self.node_index.get(id) else {
            return Vec::new();
        };
        let reversed = Reversed(&self.digraph);
        let mut bfs = Bfs::new(reversed, start);
        let mut out = Vec::new();
        while let Some(idx) = bfs.next(reversed) {
            if idx != start {
                out.push(self.digraph[idx].id.clone());
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
