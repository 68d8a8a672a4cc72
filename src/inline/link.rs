//! Link/image closing-bracket resolution (CommonMark §6.3): once a `]` is
//! found with a matching unmatched `[`/`![` earlier, this decides which of
//! the four forms (inline, full reference, collapsed reference, shortcut
//! reference) follows, and how many bytes of the tail it consumes.

use crate::scanner::{parse_link_destination, parse_link_label, parse_link_title};

pub enum LinkTail {
    Inline { url: String, title: Option<String>, consumed: usize },
    /// A `[label]` or `[]` reference form. `label` is empty for the
    /// collapsed (`[]`) and shortcut (nothing at all) forms, in which case
    /// the caller looks up the bracket's own text as the label instead.
    Reference { label: String, consumed: usize },
}

pub fn try_match(rest: &str) -> Option<LinkTail> {
    if let Some(after_paren) = rest.strip_prefix('(') {
        return match_inline(after_paren).map(|(url, title, inner_consumed)| LinkTail::Inline {
            url,
            title,
            consumed: 1 + inner_consumed,
        });
    }
    if rest.starts_with('[') {
        if let Some((label, consumed)) = parse_link_label(rest) {
            return Some(LinkTail::Reference { label, consumed });
        }
        if rest.starts_with("[]") {
            return Some(LinkTail::Reference { label: String::new(), consumed: 2 });
        }
        return None;
    }
    Some(LinkTail::Reference { label: String::new(), consumed: 0 })
}

fn match_inline(s: &str) -> Option<(String, Option<String>, usize)> {
    let (after_ws, _) = skip_optional_whitespace(s);
    let mut consumed = s.len() - after_ws.len();

    if let Some(rest) = after_ws.strip_prefix(')') {
        let _ = rest;
        return Some((String::new(), None, consumed + 1));
    }

    let (url, url_bytes) = parse_link_destination(after_ws)?;
    consumed += url_bytes;
    let after_url = &after_ws[url_bytes..];

    let (after_ws2, _) = skip_optional_whitespace(after_url);
    let ws2_len = after_url.len() - after_ws2.len();

    if let Some(rest) = after_ws2.strip_prefix(')') {
        let _ = rest;
        return Some((url, None, consumed + ws2_len + 1));
    }

    let (title, title_bytes) = parse_link_title(after_ws2)?;
    let after_title = &after_ws2[title_bytes..];
    let (after_ws3, _) = skip_optional_whitespace(after_title);
    let closing = after_ws3.strip_prefix(')')?;
    let _ = closing;
    let total = consumed + ws2_len + title_bytes + (after_title.len() - after_ws3.len()) + 1;
    Some((url, Some(title), total))
}

fn skip_optional_whitespace(s: &str) -> (&str, usize) {
    let mut i = 0;
    let bytes = s.as_bytes();
    while i < bytes.len() && (bytes[i] == b' ' || bytes[i] == b'\t' || bytes[i] == b'\n') {
        i += 1;
    }
    (&s[i..], i)
}
