//! Link reference definitions (CommonMark §4.7): `[label]: dest "title"`,
//! parsed greedily off the front of what would otherwise become a
//! paragraph's content, one definition at a time.

use crate::scanner::{parse_link_destination, parse_link_label, parse_link_title};

pub struct ParsedReferenceDef {
    pub label: String,
    pub url: String,
    pub title: Option<String>,
    /// Bytes of `text` consumed by this definition, including its
    /// terminating newline if present.
    pub consumed: usize,
}

/// Attempts to parse one reference definition at the start of `text`. On
/// success, `text[consumed..]` is what remains to be parsed as further
/// reference definitions or, failing that, as a paragraph.
pub fn try_parse(text: &str) -> Option<ParsedReferenceDef> {
    let (label, label_bytes) = parse_link_label(text)?;
    let after_label = &text[label_bytes..];
    let after_colon = after_label.strip_prefix(':')?;

    let (after_ws1, _) = skip_spacing_with_at_most_one_newline(after_colon);
    let (url, url_bytes) = parse_link_destination(after_ws1)?;
    let after_url = &after_ws1[url_bytes..];

    let mut consumed_before_title = label_bytes + 1 + (after_colon.len() - after_ws1.len()) + url_bytes;

    // Try a title: it must be separated from the destination by
    // whitespace (with an optional newline), and after the title only
    // whitespace may remain on that line.
    let (after_ws2, crossed_newline) = skip_spacing_with_at_most_one_newline(after_url);
    if !after_ws2.is_empty() {
        if let Some((title, title_bytes)) = parse_link_title(after_ws2) {
            let after_title = &after_ws2[title_bytes..];
            let rest_of_line = after_title.split('\n').next().unwrap_or("");
            if rest_of_line.trim().is_empty() {
                let title_span = after_url.len() - after_ws2.len() + title_bytes;
                consumed_before_title += title_span;
                let total = consumed_before_title;
                return Some(finish(label, url, Some(title), text, total));
            }
        }
    }

    // No title (or title parse failed/left trailing junk): the
    // destination line itself must end in only whitespace.
    let rest_of_line = after_url.split('\n').next().unwrap_or("");
    if !rest_of_line.trim().is_empty() {
        return None;
    }
    let _ = crossed_newline;
    Some(finish(label, url, None, text, consumed_before_title))
}

fn finish(label: String, url: String, title: Option<String>, text: &str, consumed: usize) -> ParsedReferenceDef {
    let mut consumed = consumed;
    if let Some(nl) = text[consumed..].find('\n') {
        consumed += nl + 1;
    } else {
        consumed = text.len();
    }
    ParsedReferenceDef { label, url, title, consumed }
}

/// Skips spaces/tabs, allowing at most one embedded newline (itself
/// followed by more spaces/tabs), per CommonMark's "optional line ending"
/// rule between the label/destination/title. Returns the remaining slice
/// and whether a newline was crossed.
fn skip_spacing_with_at_most_one_newline(s: &str) -> (&str, bool) {
    let mut i = 0;
    let bytes = s.as_bytes();
    let mut crossed = false;
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'\n' {
        crossed = true;
        i += 1;
        while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t') {
            i += 1;
        }
    }
    (&s[i..], crossed)
}
