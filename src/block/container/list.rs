//! List marker recognition (CommonMark §5.2).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarkerInfo {
    pub ordered: bool,
    pub start: u64,
    pub marker_char: char,
    /// Bytes of the marker itself (digits+delimiter, or the bullet char).
    pub marker_width: usize,
    /// Effective column width of the whitespace between the marker and the
    /// item's content (1-4, or 1 if the item starts with a blank line).
    pub content_indent: usize,
    /// Total bytes consumed from the start of the line up to the content.
    pub consumed: usize,
}

/// Parses a bullet (`-`, `+`, `*`) or ordered (`1.`/`1)`, up to 9 digits)
/// list marker at the start of `line`. `line` must already be past any
/// container prefixes and have at most 3 columns of indentation, which the
/// caller is responsible for stripping before calling this.
pub fn parse_marker(line: &str) -> Option<ListMarkerInfo> {
    let mut chars = line.char_indices().peekable();
    let (_, first) = chars.next()?;

    let (ordered, start, marker_char, marker_width) = if matches!(first, '-' | '+' | '*') {
        (false, 0u64, first, 1usize)
    } else if first.is_ascii_digit() {
        let mut digits = String::new();
        digits.push(first);
        let mut width = 1usize;
        let mut delim = None;
        for (_, c) in chars.by_ref() {
            if c.is_ascii_digit() && digits.len() < 9 {
                digits.push(c);
                width += 1;
            } else if c == '.' || c == ')' {
                delim = Some(c);
                width += 1;
                break;
            } else {
                return None;
            }
        }
        let delim = delim?;
        let start: u64 = digits.parse().ok()?;
        (true, start, delim, width)
    } else {
        return None;
    };

    let after = &line[marker_width..];
    // Marker must be followed by whitespace or end-of-line; a bullet
    // followed directly by another char (e.g. "-5") is not a list marker,
    // except that an empty rest-of-line is fine (blank list item).
    if !after.is_empty() && !after.starts_with(' ') && !after.starts_with('\t') {
        return None;
    }

    let ws_width = after.len() - after.trim_start_matches(' ').len();
    let (content_indent, ws_bytes) = if after.is_empty() {
        (1, 0)
    } else if after.starts_with('\t') {
        let width = 4 - (marker_width % 4);
        (if width == 0 { 4 } else { width }, 1)
    } else if ws_width == 0 {
        return None;
    } else if ws_width > 4 {
        (1, 1)
    } else {
        (ws_width, ws_width)
    };

    Some(ListMarkerInfo {
        ordered,
        start,
        marker_char,
        marker_width,
        content_indent,
        consumed: marker_width + ws_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_marker() {
        let m = parse_marker("- item").unwrap();
        assert!(!m.ordered);
        assert_eq!(m.marker_char, '-');
        assert_eq!(m.content_indent, 1);
    }

    #[test]
    fn ordered_marker_with_paren() {
        let m = parse_marker("12) item").unwrap();
        assert!(m.ordered);
        assert_eq!(m.start, 12);
        assert_eq!(m.marker_char, ')');
    }

    #[test]
    fn bullet_with_wide_indent_caps_at_one() {
        let m = parse_marker("-     item").unwrap();
        assert_eq!(m.content_indent, 1);
    }

    #[test]
    fn bullet_with_nothing_after_is_blank_item() {
        let m = parse_marker("-").unwrap();
        assert_eq!(m.content_indent, 1);
    }

    #[test]
    fn rejects_non_marker() {
        assert!(parse_marker("-5").is_none());
        assert!(parse_marker("hello").is_none());
    }

    #[test]
    fn rejects_ten_digit_number() {
        assert!(parse_marker("1234567890. x").is_none());
    }
}
