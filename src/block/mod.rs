//! Block structure parsing (C2-C5): the container-stack driver and the
//! per-construct container/leaf recognizers it dispatches to.

pub mod container;
pub mod driver;
pub mod leaf;

use crate::config::Config;
use crate::error::Result;
use crate::refs::ReferenceTable;
use crate::tree::{BlockKind, Document};

/// A caller-supplied leaf block recognizer, appended after the built-in
/// leaf parsers (SPEC_FULL.md, "custom parser injection"). The driver
/// tries built-ins first, then these, at each point it would otherwise
/// start a new leaf block or fall through to a paragraph.
pub trait LeafBlockParser: Send + Sync {
    /// Stable name for diagnostics; not rendered anywhere.
    fn name(&self) -> &str;

    /// Attempt to recognize `line` (already past the container prefixes and
    /// `indent` spaces of leading whitespace) as the opening line of a new
    /// leaf block. Returns the block's kind and the number of bytes of
    /// `line` consumed as the block's "marker" (the remainder becomes the
    /// block's first content).
    fn try_start(&self, line: &str, indent: usize) -> Option<LeafBlockStart>;
}

pub struct LeafBlockStart {
    pub kind: BlockKind,
    pub consumed: usize,
}

/// Runs the block phase (C3) over `source`, producing the block tree and
/// the collected reference table. Inline content is left as raw text in
/// each leaf node's single placeholder child; `crate::inline` expands it
/// in the second pass.
pub fn parse_document(
    source: &str,
    config: &Config,
    extensions: &[Box<dyn LeafBlockParser>],
) -> Result<(Document, ReferenceTable)> {
    driver::run(source, config, extensions)
}
