//! HTML blocks (CommonMark §4.6): thin re-export point. The actual variant
//! detection and end-condition tables live in `scanner::html_patterns`
//! since they're pure string matching with no block-driver state; this
//! module exists so `block::leaf` enumerates every construct uniformly.

pub use crate::scanner::html_patterns::{detect_html_block_variant, html_block_end_matches};

/// HTML block variants 6 and 7 close on the next blank line rather than a
/// content pattern; this is the one piece of end-condition logic that
/// needs driver state (the "was the previous line blank" flag), so it
/// lives here instead of in the scanner.
pub fn closes_on_blank_line(variant: u8) -> bool {
    matches!(variant, 6 | 7)
}
