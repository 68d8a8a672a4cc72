//! Scanner primitives (C1): line slicing, indentation, fence/link/HTML
//! pattern recognition, and Unicode classification. These are pure
//! functions over `&str` slices with no parser state of their own; block
//! and inline parsers compose them.

pub mod fence;
pub mod html_patterns;
pub mod line;
pub mod link;
pub mod unicode;

pub use fence::{is_closing_fence, parse_opening_fence, FenceInfo};
pub use html_patterns::{detect_html_block_variant, html_block_end_matches};
pub use line::{consume_indent, is_blank, leading_indent_width, line_bounds};
pub use link::{parse_link_destination, parse_link_label, parse_link_title};
pub use unicode::{is_unicode_punctuation, is_unicode_whitespace};
