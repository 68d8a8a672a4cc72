//! Parser configuration (C6 glossary term "Config"): which extensions are
//! active and how the renderer should behave. Mirrors the teacher's
//! settings-record style but serializable, since callers embed it in their
//! own config files.

use serde::{Deserialize, Serialize};

use crate::block::LeafBlockParser;
use crate::inline::InlineParser;

/// Plain-data, serializable knobs. Everything that needs `Box<dyn _>` lives
/// in `Extensions` instead, so `Config` itself stays `Serialize`/`Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Escape raw `<`/`>`/`&` etc. in text nodes (always true in practice;
    /// kept as a knob for parity with the renderer's per-node escaping).
    pub escape_html_in_text: bool,
    /// Pass inline/block HTML through unescaped rather than dropping it.
    pub keep_html: bool,
    /// GFM pipe tables (`leaf::table`).
    pub gfm_tables: bool,
    /// GFM `~~strikethrough~~`.
    pub gfm_strikethrough: bool,
    /// GFM autolink extension (bare URLs/www./emails without `<>`).
    pub gfm_autolinks: bool,
    /// Maximum open-container nesting depth before `ParseError::DepthExceeded`.
    pub max_container_depth: usize,
    /// Maximum link-in-link / image-in-link recursion depth.
    pub max_inline_recursion: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config::commonmark()
    }
}

impl Config {
    /// Strict CommonMark 0.29, no GFM extensions.
    pub fn commonmark() -> Self {
        Config {
            escape_html_in_text: true,
            keep_html: true,
            gfm_tables: false,
            gfm_strikethrough: false,
            gfm_autolinks: false,
            max_container_depth: 32,
            max_inline_recursion: 32,
        }
    }

    /// CommonMark plus the GFM extensions this crate implements.
    pub fn gfm() -> Self {
        Config {
            gfm_tables: true,
            gfm_strikethrough: true,
            gfm_autolinks: true,
            ..Config::commonmark()
        }
    }
}

/// Caller-supplied parser extensions. Not `Serialize`: trait objects can't
/// round-trip through JSON, so this is always constructed in Rust and
/// passed alongside a `Config`.
#[derive(Default)]
pub struct Extensions {
    pub leaf_parsers: Vec<Box<dyn LeafBlockParser>>,
    pub inline_parsers: Vec<Box<dyn InlineParser>>,
}

impl Extensions {
    pub fn new() -> Self {
        Extensions::default()
    }

    pub fn with_leaf_parser(mut self, parser: Box<dyn LeafBlockParser>) -> Self {
        self.leaf_parsers.push(parser);
        self
    }

    pub fn with_inline_parser(mut self, parser: Box<dyn InlineParser>) -> Self {
        self.inline_parsers.push(parser);
        self
    }
}
