//! Default fishbone dataset: the problem statement and the 6M categories.

use crate::tree::{CauseNode, CauseTree};

pub const ROOT_ID: &str = "root";
pub const ROOT_LABEL: &str = "VẤN ĐỀ CHÍNH";

pub const CATEGORIES: [&str; 6] = [
    "Con người",
    "Máy móc",
    "Phương pháp",
    "Nguyên vật liệu",
    "Đo lường",
    "Môi trường",
];

/// Root plus six branches `branch-1`..`branch-6`, no causes yet.
pub fn default_tree() -> CauseTree {
    let branches = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, label)| CauseNode::new(format!("branch-{}", i + 1), *label))
        .collect();
    CauseTree::new(CauseNode::new(ROOT_ID, ROOT_LABEL).with_children(branches))
}
