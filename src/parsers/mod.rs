//! Parser trait and the outline parser.

pub mod outline;

pub use outline::OutlineParser;

use crate::error::Result;
use crate::tree::{CauseTree, IdGenerator};

/// Trait for cause-tree parsers.
pub trait Parser {
    /// Parse `src` into a tree, drawing ids from `ids`.
    fn parse(&self, src: &str, ids: &mut IdGenerator) -> Result<CauseTree>;
}

/// Parse an outline with a fresh id generator.
pub fn parse(src: &str) -> Result<(CauseTree, IdGenerator)> {
    let mut ids = IdGenerator::new();
    let tree = OutlineParser::new().parse(src, &mut ids)?;
    Ok((tree, ids))
}
