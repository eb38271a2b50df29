use super::*;
use crate::seed::default_tree;

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn sample() -> CauseTree {
    CauseTree::new(CauseNode::new("root", "Problem").with_children(vec![
        CauseNode::new("a", "A").with_children(vec![
            CauseNode::new("a1", "A1").with_children(vec![CauseNode::new("a1x", "A1x")]),
            CauseNode::new("a2", "A2"),
        ]),
        CauseNode::new("b", "B").with_children(vec![CauseNode::new("b1", "B1")]),
    ]))
}

// ── rename_node ───────────────────────────────────────────────────────────

#[test]
fn test_rename_changes_only_target_label() {
    let t = sample();
    let r = rename_node(&t, &id("a2"), "renamed");
    assert_eq!(r.find(&id("a2")).unwrap().label, "renamed");
    assert_eq!(r.ids(), t.ids());
    for (node, _) in t.walk() {
        if node.id != id("a2") {
            assert_eq!(r.find(&node.id).unwrap().label, node.label);
        }
    }
}

#[test]
fn test_rename_shares_untouched_subtrees() {
    let t = sample();
    let r = rename_node(&t, &id("a2"), "renamed");
    // Sibling branch and sibling cause are the very same allocations.
    assert!(Arc::ptr_eq(&t.root.children[1], &r.root.children[1]));
    assert!(Arc::ptr_eq(
        &t.root.children[0].children[0],
        &r.root.children[0].children[0]
    ));
    // Ancestors were copied.
    assert!(!Arc::ptr_eq(&t.root, &r.root));
    assert!(!Arc::ptr_eq(&t.root.children[0], &r.root.children[0]));
}

#[test]
fn test_rename_unknown_is_noop() {
    let t = sample();
    let r = rename_node(&t, &id("nope"), "x");
    assert!(Arc::ptr_eq(&t.root, &r.root));
    assert_eq!(r, t);
}

#[test]
fn test_rename_root() {
    let t = sample();
    let r = rename_node(&t, &id("root"), "New problem");
    assert_eq!(r.root.label, "New problem");
    assert!(Arc::ptr_eq(&t.root.children[0], &r.root.children[0]));
}

// ── add_child ─────────────────────────────────────────────────────────────

#[test]
fn test_add_child_appends_placeholder() {
    let t = default_tree();
    let mut ids = IdGenerator::for_tree(&t);
    let (r, child) = add_child(&t, &id("branch-3"), &mut ids);
    let child = child.unwrap();
    assert_eq!(child, id("cause-1"));
    let parent = r.find(&id("branch-3")).unwrap();
    assert_eq!(parent.children.len(), 1);
    assert_eq!(parent.children[0].id, child);
    assert_eq!(parent.children[0].label, DEFAULT_CHILD_LABEL);
    assert_eq!(r.kind_of(&child), Some(crate::tree::NodeKind::Cause));
}

#[test]
fn test_add_child_goes_last() {
    let t = sample();
    let mut ids = IdGenerator::for_tree(&t);
    let (r, child) = add_child(&t, &id("a"), &mut ids);
    let a = r.find(&id("a")).unwrap();
    let order: Vec<&str> = a.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(order, vec!["a1", "a2", child.unwrap().as_str()]);
}

#[test]
fn test_add_child_unknown_parent_is_noop() {
    let t = sample();
    let mut ids = IdGenerator::for_tree(&t);
    let (r, child) = add_child(&t, &id("ghost"), &mut ids);
    assert!(child.is_none());
    assert!(Arc::ptr_eq(&t.root, &r.root));
    // Generator untouched: the next real add still gets the first id.
    assert_eq!(ids.next_id(), id("cause-1"));
}

#[test]
fn test_add_child_skips_ids_already_in_tree() {
    let t = CauseTree::new(
        CauseNode::new("root", "P").with_children(vec![CauseNode::new("cause-1", "taken")]),
    );
    let mut ids = IdGenerator::new();
    let (r, child) = add_child(&t, &id("root"), &mut ids);
    assert_eq!(child, Some(id("cause-2")));
    assert_eq!(r.node_count(), 3);
}

// ── delete_subtree ────────────────────────────────────────────────────────

#[test]
fn test_delete_removes_whole_subtree() {
    let t = sample();
    let r = delete_subtree(&t, &id("a"));
    for gone in ["a", "a1", "a1x", "a2"] {
        assert!(!r.contains(&id(gone)), "{gone} should be gone");
    }
    assert_eq!(r.ids(), vec![id("root"), id("b"), id("b1")]);
    assert!(Arc::ptr_eq(&t.root.children[1], &r.root.children[0]));
}

#[test]
fn test_delete_nested_leaf() {
    let t = sample();
    let r = delete_subtree(&t, &id("a1x"));
    assert!(!r.contains(&id("a1x")));
    assert!(r.find(&id("a1")).unwrap().is_leaf());
    assert_eq!(r.node_count(), t.node_count() - 1);
}

#[test]
fn test_delete_root_is_refused() {
    let t = sample();
    let r = delete_subtree(&t, &id("root"));
    assert!(Arc::ptr_eq(&t.root, &r.root));
}

#[test]
fn test_delete_unknown_is_noop() {
    let t = sample();
    let r = delete_subtree(&t, &id("ghost"));
    assert_eq!(r, t);
}

// ── id lifetime ───────────────────────────────────────────────────────────

#[test]
fn test_deleted_ids_are_never_reissued() {
    let t = default_tree();
    let mut ids = IdGenerator::for_tree(&t);
    let (t, first) = add_child(&t, &id("branch-1"), &mut ids);
    let first = first.unwrap();
    let t = delete_subtree(&t, &first);
    let (_, second) = add_child(&t, &id("branch-1"), &mut ids);
    assert_ne!(second.unwrap(), first);
}

#[test]
fn test_input_tree_is_never_mutated() {
    let t = sample();
    let snapshot = t.clone();
    let mut ids = IdGenerator::for_tree(&t);
    let _ = rename_node(&t, &id("a"), "x");
    let _ = add_child(&t, &id("a"), &mut ids);
    let _ = delete_subtree(&t, &id("b"));
    assert_eq!(t, snapshot);
}

// ── Deep trees ────────────────────────────────────────────────────────────

fn chain(len: usize) -> CauseTree {
    let mut node = CauseNode::new(format!("n{}", len - 1), "tip");
    for i in (0..len - 1).rev() {
        node = CauseNode::new(format!("n{i}"), format!("N{i}")).with_children(vec![node]);
    }
    CauseTree::new(CauseNode::new("root", "Problem").with_children(vec![node]))
}

#[test]
fn test_mutations_on_very_deep_chain() {
    const LEN: usize = 100_000;
    let t = chain(LEN);
    let tip = id(&format!("n{}", LEN - 1));

    let renamed = rename_node(&t, &tip, "renamed");
    assert_eq!(renamed.find(&tip).unwrap().label, "renamed");
    assert_eq!(t.find(&tip).unwrap().label, "tip");

    let mut ids = IdGenerator::for_tree(&t);
    let (grown, child) = add_child(&t, &tip, &mut ids);
    let child = child.unwrap();
    assert_eq!(grown.node_count(), LEN + 2);
    assert_eq!(grown.depth_of(&child), Some(LEN + 1));

    let cut = delete_subtree(&t, &id("n50000"));
    assert_eq!(cut.node_count(), 1 + 50_000);
    assert!(!cut.contains(&tip));
    assert_eq!(t.node_count(), LEN + 1);
}
