//! Paragraphs (CommonMark §4.8): the fallback leaf block. Any line that
//! doesn't start a more specific construct, and isn't blank, opens or
//! continues a paragraph; there is no start pattern to match here beyond
//! "not blank", which the driver checks directly.

/// True if `line` would interrupt an open paragraph under CommonMark's
/// "paragraph interruption" rules: thematic breaks, ATX headings, fences,
/// blockquote markers, and list markers with real content may interrupt;
/// indented code and setext underlines may not (setext is handled
/// separately since it *continues* the paragraph as a heading).
pub fn can_interrupt_with_list(has_content_after_marker: bool, ordered_start_is_one: bool) -> bool {
    has_content_after_marker && ordered_start_is_one
}
