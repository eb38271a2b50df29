//! Fishbone (Ishikawa) layout.
//!
//! The root sits at the right end of a horizontal spine. Branches hang off
//! the spine alternating above and below; everything deeper fans out to the
//! right of its parent, centred on the parent's y.
//!
//! Pure and deterministic: the same tree and config always give the same
//! diagram. Position continuity across edits is handled separately by
//! [`super::reconcile`].

use crate::config::LayoutConfig;
use crate::tree::{CauseNode, CauseTree, NodeId, NodeKind};

use super::types::{
    Diagram, DiagramEdge, DiagramNode, EdgeStyle, Handle, Point, SPINE_EDGE_ID, TAIL_ID,
    anchor_id,
};

/// Lay out `tree` as a fishbone diagram.
///
/// Node ids are used as diagram ids unchanged, so they must be unique and
/// must not collide with [`TAIL_ID`] or the anchor prefix. `EditSession`
/// checks this when it starts.
pub fn layout(tree: &CauseTree, config: &LayoutConfig) -> Diagram {
    let mut diagram = Diagram::new();
    let root = &tree.root;
    let branch_count = root.children.len();

    let spine_length = (branch_count as f64 + 1.0) * config.spacing_x;
    let root_pos = Point::new(
        spine_length + config.root_offset_x,
        config.spine_y - config.root_height / 2.0,
    );
    diagram.nodes.push(DiagramNode::new(
        root.id.clone(),
        root_pos,
        root.label.clone(),
        NodeKind::Root.into(),
    ));

    let tail = NodeId::new(TAIL_ID);
    diagram.nodes.push(DiagramNode::anchor(
        tail.clone(),
        Point::new(config.spine_start_x, config.spine_y),
    ));
    diagram.edges.push(
        DiagramEdge::new(SPINE_EDGE_ID, tail, root.id.clone(), EdgeStyle::Spine)
            .with_handles(None, Some(Handle::Left)),
    );

    for (idx, branch) in root.children.iter().enumerate() {
        place_branch(&mut diagram, branch, idx, config);
    }

    tracing::trace!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "fishbone layout"
    );
    diagram
}

/// Even-indexed branches go above the spine (-1), odd below (+1).
pub fn branch_direction(index: usize) -> f64 {
    if index % 2 == 0 { -1.0 } else { 1.0 }
}

fn place_branch(diagram: &mut Diagram, branch: &CauseNode, index: usize, config: &LayoutConfig) {
    let slot_x = (index as f64 + 1.0) * config.spacing_x;
    let direction = branch_direction(index);
    let position = Point::new(
        slot_x - config.rib_offset_x,
        config.spine_y + direction * config.rib_height,
    );
    diagram.nodes.push(DiagramNode::new(
        branch.id.clone(),
        position,
        branch.label.clone(),
        NodeKind::Branch.into(),
    ));

    let anchor = anchor_id(&branch.id);
    diagram.nodes.push(DiagramNode::anchor(
        anchor.clone(),
        Point::new(slot_x, config.spine_y),
    ));

    // The rib leaves the branch from the side facing the spine.
    let handle = if direction < 0.0 {
        Handle::Bottom
    } else {
        Handle::Top
    };
    diagram.edges.push(
        DiagramEdge::new(
            format!("e-rib-{}", branch.id),
            branch.id.clone(),
            anchor,
            EdgeStyle::Rib,
        )
        .with_handles(Some(handle), None),
    );

    place_descendants(diagram, branch, position, config);
}

/// One queued child: `(parent, child, child position, child depth)`.
type Pending<'a> = (&'a CauseNode, &'a CauseNode, Point, usize);

/// Place every node below `branch`, in pre-order. Uses an explicit stack so
/// tree depth is bounded by memory, not by the call stack.
fn place_descendants(
    diagram: &mut Diagram,
    branch: &CauseNode,
    branch_pos: Point,
    config: &LayoutConfig,
) {
    let mut stack: Vec<Pending<'_>> = Vec::new();
    queue_children(&mut stack, branch, branch_pos, 2, config);

    while let Some((parent, child, position, depth)) = stack.pop() {
        diagram.nodes.push(DiagramNode::new(
            child.id.clone(),
            position,
            child.label.clone(),
            NodeKind::at_depth(depth).into(),
        ));
        diagram.edges.push(
            DiagramEdge::new(
                format!("e-{}-{}", parent.id, child.id),
                parent.id.clone(),
                child.id.clone(),
                EdgeStyle::Curved,
            )
            .with_handles(Some(Handle::Right), Some(Handle::Left)),
        );
        queue_children(&mut stack, child, position, depth + 1, config);
    }
}

/// Fan `parent`'s children out around `parent_pos`. Pushed last-first so
/// they pop in child order.
fn queue_children<'a>(
    stack: &mut Vec<Pending<'a>>,
    parent: &'a CauseNode,
    parent_pos: Point,
    depth: usize,
    config: &LayoutConfig,
) {
    let count = parent.children.len();
    if count == 0 {
        return;
    }
    let offset_x = config.level_offset_x(depth);
    let spacing = config.level_spacing(depth);
    let centre = (count as f64 - 1.0) / 2.0;

    for (idx, child) in parent.children.iter().enumerate().rev() {
        let position = Point::new(
            parent_pos.x + offset_x,
            parent_pos.y + (idx as f64 - centre) * spacing,
        );
        stack.push((parent, child.as_ref(), position, depth));
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_fishbone.rs"]
mod tests;
