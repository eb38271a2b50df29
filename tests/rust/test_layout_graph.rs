use super::*;
use crate::config::LayoutConfig;
use crate::layout::fishbone::layout;
use crate::layout::types::{DiagramEdge, DiagramNode, Point, TAIL_ID, anchor_id};
use crate::seed::default_tree;
use crate::tree::{CauseNode, CauseTree};

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn sample_diagram() -> Diagram {
    let t = CauseTree::new(CauseNode::new("root", "P").with_children(vec![
        CauseNode::new("b0", "B0").with_children(vec![
            CauseNode::new("c0", "C0").with_children(vec![CauseNode::new("s0", "S0")]),
            CauseNode::new("c1", "C1"),
        ]),
        CauseNode::new("b1", "B1"),
    ]));
    layout(&t, &LayoutConfig::default())
}

// ── Basic construction ────────────────────────────────────────────────────

#[test]
fn test_seed_projection() {
    let g = DiagramGraph::from_diagram(&layout(&default_tree(), &LayoutConfig::default()));
    assert_eq!(g.node_count(), 14);
    assert_eq!(g.edge_count(), 7);
    assert!(g.dangling.is_empty());
    assert!(g.is_dag());
    assert!(g.orphans().is_empty());
}

#[test]
fn test_degrees() {
    let g = DiagramGraph::from_diagram(&sample_diagram());
    assert_eq!(g.in_degree(&id("root")), 1);
    assert_eq!(g.out_degree(&id(TAIL_ID)), 1);
    // rib + two causes
    assert_eq!(g.out_degree(&id("b0")), 3);
    assert_eq!(g.in_degree(&anchor_id(&id("b0"))), 1);
    assert_eq!(g.in_degree(&id("missing")), 0);
}

#[test]
fn test_descendants_and_ancestors() {
    let g = DiagramGraph::from_diagram(&sample_diagram());
    let mut below = g.descendants(&id("c0"));
    below.sort();
    assert_eq!(below, vec![id("s0")]);

    let mut above = g.ancestors(&id("s0"));
    above.sort();
    assert_eq!(above, vec![id("b0"), id("c0")]);

    assert!(g.descendants(&id("missing")).is_empty());
}

// ── Broken diagrams ───────────────────────────────────────────────────────

#[test]
fn test_dangling_edge_is_reported() {
    let mut d = sample_diagram();
    d.edges.push(DiagramEdge::new(
        "e-bad",
        id("c1"),
        id("ghost"),
        EdgeStyle::Curved,
    ));
    let g = DiagramGraph::from_diagram(&d);
    assert_eq!(g.dangling, vec![("e-bad".to_string(), id("ghost"))]);
}

#[test]
fn test_unattached_node_is_orphan() {
    let mut d = sample_diagram();
    d.nodes.push(DiagramNode::new(
        id("floating"),
        Point::new(0.0, 0.0),
        "F",
        DiagramNodeKind::Cause,
    ));
    let g = DiagramGraph::from_diagram(&d);
    assert_eq!(g.orphans(), vec![id("floating")]);
}
