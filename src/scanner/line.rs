//! Line slicing and tab-expanded indentation — the scanner primitives every
//! block parser leans on (spec.md §4.1 "Line slicing").

/// Given a byte offset into `source`, returns
/// `(content_end, end_including_terminator)` for the line starting there:
/// `content_end` is the offset of the line terminator (or `source.len()` at
/// EOF), `end_including_terminator` is the offset just past it. Recognizes
/// `\n`, `\r\n`, and a bare `\r`.
pub fn line_bounds(source: &str, start: usize) -> (usize, usize) {
    let bytes = source.as_bytes();
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => return (i, i + 1),
            b'\r' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                    return (i, i + 2);
                }
                return (i, i + 1);
            }
            _ => i += 1,
        }
    }
    (bytes.len(), bytes.len())
}

/// Counts the effective column width of leading whitespace, expanding tabs
/// to the next multiple of 4 *relative to `start_column`* (SPEC_FULL.md §3:
/// container-relative tab stops, not always column 0). Returns
/// `(effective_width, bytes_consumed)` for the leading whitespace run only.
pub fn leading_indent_width(s: &str, start_column: usize) -> (usize, usize) {
    let mut width = 0usize;
    let mut bytes = 0usize;
    let mut column = start_column;
    for ch in s.chars() {
        match ch {
            ' ' => {
                width += 1;
                column += 1;
                bytes += 1;
            }
            '\t' => {
                let advance = 4 - (column % 4);
                width += advance;
                column += advance;
                bytes += 1;
            }
            _ => break,
        }
    }
    (width, bytes)
}

/// Consumes up to `max_width` effective columns of leading indentation,
/// never splitting a tab (a tab that would only partially fit is left
/// unconsumed, per CommonMark's "partial tab" rule). Returns
/// `(bytes_consumed, effective_width_consumed)`.
pub fn consume_indent(s: &str, start_column: usize, max_width: usize) -> (usize, usize) {
    let mut width = 0usize;
    let mut bytes = 0usize;
    let mut column = start_column;
    for ch in s.chars() {
        if width >= max_width {
            break;
        }
        match ch {
            ' ' => {
                width += 1;
                column += 1;
                bytes += ch.len_utf8();
            }
            '\t' => {
                let advance = 4 - (column % 4);
                if width + advance > max_width {
                    break;
                }
                width += advance;
                column += advance;
                bytes += ch.len_utf8();
            }
            _ => break,
        }
    }
    (bytes, width)
}

/// True if `line` contains only whitespace (spaces/tabs), i.e. a blank line.
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c == ' ' || c == '\t').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_bounds_handles_all_terminators() {
        assert_eq!(line_bounds("abc\ndef", 0), (3, 4));
        assert_eq!(line_bounds("abc\r\ndef", 0), (3, 5));
        assert_eq!(line_bounds("abc\rdef", 0), (3, 4));
        assert_eq!(line_bounds("abc", 0), (3, 3));
    }

    #[test]
    fn tab_expands_to_four_column_stop() {
        assert_eq!(leading_indent_width("\tx", 0), (4, 1));
        assert_eq!(leading_indent_width(" \tx", 0), (4, 2));
        assert_eq!(leading_indent_width("  \tx", 0), (4, 3));
        assert_eq!(leading_indent_width("   \tx", 0), (4, 4));
    }

    #[test]
    fn tab_expansion_is_relative_to_start_column() {
        // Starting at column 2 (e.g. after a 2-wide blockquote marker), a
        // tab should only advance to column 4, i.e. 2 effective columns.
        assert_eq!(leading_indent_width("\tx", 2), (2, 1));
    }

    #[test]
    fn consume_indent_stops_on_partial_tab() {
        // max_width 2 with a tab worth 4: the tab cannot be split, so
        // nothing is consumed.
        let (bytes, width) = consume_indent("\ttext", 0, 2);
        assert_eq!((bytes, width), (0, 0));
    }

    #[test]
    fn blank_line_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t  "));
        assert!(!is_blank("  x"));
    }
}
