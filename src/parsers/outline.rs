//! Indented outline format.
//!
//! ```text
//! %% comment
//! Late deliveries
//! - People
//!   - Not enough drivers
//!     - High turnover
//! - Machines
//! ```
//!
//! The first non-blank line is the root problem. Every following line is a
//! `-`, `*` or `+` bullet; two spaces or one tab per level, and a bullet may
//! go at most one level deeper than the line before it.

use std::sync::Arc;

use regex::Regex;

use super::Parser;
use crate::error::{FishboneError, Result};
use crate::seed::ROOT_ID;
use crate::tree::{CauseNode, CauseTree, IdGenerator, NodeId};

const COMMENT_PREFIX: &str = "%%";
const INDENT_WIDTH: usize = 2;

pub struct OutlineParser {
    bullet: Regex,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineParser {
    pub fn new() -> Self {
        Self {
            bullet: Regex::new(r"^(?P<indent>[ \t]*)[-*+][ \t]+(?P<label>\S.*?)[ \t]*$")
                .expect("bullet pattern is valid"),
        }
    }

    /// Depth of a bullet line (1 = branch), from its leading whitespace.
    fn depth(indent: &str, line_no: usize) -> Result<usize> {
        let width: usize = indent
            .chars()
            .map(|c| if c == '\t' { INDENT_WIDTH } else { 1 })
            .sum();
        if width % INDENT_WIDTH != 0 {
            return Err(FishboneError::parse(
                line_no,
                format!("indentation must be a multiple of {INDENT_WIDTH} spaces"),
            ));
        }
        Ok(width / INDENT_WIDTH + 1)
    }
}

impl Parser for OutlineParser {
    fn parse(&self, src: &str, ids: &mut IdGenerator) -> Result<CauseTree> {
        // stack[d] is the open node at depth d.
        let mut stack: Vec<CauseNode> = Vec::new();

        for (idx, raw) in src.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
                continue;
            }

            let Some(caps) = self.bullet.captures(raw) else {
                if stack.is_empty() && !raw.starts_with([' ', '\t']) {
                    let root_id = NodeId::new(ROOT_ID);
                    ids.observe(&root_id);
                    stack.push(CauseNode::new(root_id, trimmed));
                    continue;
                }
                if !raw.starts_with([' ', '\t']) {
                    return Err(FishboneError::parse(
                        line_no,
                        "an outline has exactly one root line",
                    ));
                }
                return Err(FishboneError::parse(line_no, "expected '- label'"));
            };

            if stack.is_empty() {
                return Err(FishboneError::parse(
                    line_no,
                    "the first line must be the root problem, not a bullet",
                ));
            }

            let depth = Self::depth(&caps["indent"], line_no)?;
            if depth > stack.len() {
                return Err(FishboneError::parse(
                    line_no,
                    format!(
                        "bullet is indented {} level(s) deeper than its parent allows",
                        depth - stack.len()
                    ),
                ));
            }
            close_to(&mut stack, depth);
            stack.push(CauseNode::new(ids.next_id(), &caps["label"]));
        }

        close_to(&mut stack, 1);
        let root = stack.pop().ok_or_else(|| FishboneError::parse(0, "outline is empty"))?;
        tracing::debug!("parsed outline rooted at '{}'", root.label);
        Ok(CauseTree::new(root))
    }
}

/// Pop finished nodes into their parents until `depth` nodes remain open.
fn close_to(stack: &mut Vec<CauseNode>, depth: usize) {
    while stack.len() > depth {
        let Some(done) = stack.pop() else { break };
        if let Some(parent) = stack.last_mut() {
            parent.children.push(Arc::new(done));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_outline.rs"]
mod tests;
