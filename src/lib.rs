//! CommonMark 0.29 + GFM table/strikethrough/autolink parser and HTML
//! renderer.
//!
//! Two-pass pipeline: [`block`] walks the source once, left to right,
//! producing a block tree and collecting every link reference definition
//! (C2-C5); [`inline`] then expands each leaf block's raw placeholder text
//! into inline nodes now that the reference table is complete (C7-C8);
//! [`render`] walks the finished tree to HTML (C9).

pub mod block;
pub mod config;
pub mod error;
pub mod inline;
pub mod refs;
pub mod render;
pub mod scanner;
pub mod tree;

pub use config::{Config, Extensions};
pub use error::{ParseError, Result};
pub use refs::ReferenceTable;
pub use render::RenderOptions;
pub use tree::{Alignment, BlockKind, Document, InlineKind, Node, NodeKind, Span};

/// Parses `source` into a finished, fully inline-expanded token tree using
/// the built-in block/inline parsers only.
pub fn parse(source: &str, config: &Config) -> Result<Document> {
    parse_with_extensions(source, config, &Extensions::default())
}

/// As [`parse`], but with caller-supplied block/inline parser extensions
/// (`config.rs`'s injection point, tried after every built-in recognizer).
pub fn parse_with_extensions(source: &str, config: &Config, extensions: &Extensions) -> Result<Document> {
    log::info!("parsing {} bytes of input", source.len());
    let (mut doc, refs) = block::parse_document(source, config, &extensions.leaf_parsers)?;
    for node in &mut doc.children {
        expand_inlines(node, &refs, config, &extensions.inline_parsers);
    }
    log::debug!("parsed {} top-level block(s)", doc.children.len());
    Ok(doc)
}

/// Parses `source` and renders it straight to HTML in one call
/// (spec's `parse(source) -> html` entry point).
pub fn parse_to_html(source: &str, config: &Config) -> Result<String> {
    let doc = parse(source, config)?;
    Ok(render::render(&doc, config))
}

/// Replaces the single raw-text placeholder child the block driver leaves
/// on every `Paragraph`/`Heading`/`TableCell` with the fully resolved
/// inline nodes for its text. `CodeBlock`/`HtmlBlock`/`Reference` children
/// are already final raw content and are left untouched; every other kind
/// is recursed into.
pub(crate) fn expand_inlines(node: &mut Node, refs: &ReferenceTable, config: &Config, extensions: &[Box<dyn inline::InlineParser>]) {
    match &node.kind {
        NodeKind::Block(BlockKind::Paragraph)
        | NodeKind::Block(BlockKind::Heading { .. })
        | NodeKind::Block(BlockKind::TableCell { .. }) => {
            if let Some(raw) = take_raw_placeholder(node) {
                node.children = inline::parse_inlines(&raw, refs, config, extensions);
            }
        }
        NodeKind::Block(BlockKind::CodeBlock { .. })
        | NodeKind::Block(BlockKind::HtmlBlock { .. })
        | NodeKind::Block(BlockKind::Reference { .. }) => {}
        _ => {
            for child in &mut node.children {
                expand_inlines(child, refs, config, extensions);
            }
        }
    }
}

fn take_raw_placeholder(node: &mut Node) -> Option<String> {
    match node.children.pop() {
        Some(Node { kind: NodeKind::Inline(InlineKind::Text(t)), .. }) => Some(t),
        other => {
            if let Some(n) = other {
                node.children.push(n);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_round_trip() {
        let doc = parse("# hello", &Config::commonmark()).unwrap();
        assert_eq!(doc.children.len(), 1);
        match &doc.children[0].kind {
            NodeKind::Block(BlockKind::Heading { level }) => assert_eq!(*level, 1),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn reference_link_resolves_after_block_pass() {
        let html = parse_to_html("[x][ref]\n\n[ref]: http://e.com \"t\"\n", &Config::commonmark()).unwrap();
        assert_eq!(html, "<p><a href=\"http://e.com\" title=\"t\">x</a></p>\n");
    }

    #[test]
    fn empty_input_is_empty_output() {
        let html = parse_to_html("", &Config::commonmark()).unwrap();
        assert_eq!(html, "");
    }
}
