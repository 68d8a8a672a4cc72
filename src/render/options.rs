//! Rendering knobs. A narrower, serializable view of the fields of
//! `Config` (spec's `RenderOptions`) that the renderer actually reads, for
//! embedders that only want to round-trip render behavior without the
//! full parser configuration.

use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub escape_html: bool,
    pub keep_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { escape_html: true, keep_html: true }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self { escape_html: config.escape_html_in_text, keep_html: config.keep_html }
    }
}
