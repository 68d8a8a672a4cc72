//! Link destination/title/label scanning (spec.md §4.1).

/// Parses a link destination starting at `s[0]`. Returns the decoded
/// destination text and the number of bytes consumed from `s`.
///
/// Two forms: `<...>` (no raw newlines, unescaped `<`/`>` forbidden) or a
/// bare run of non-whitespace, non-control characters where parentheses are
/// only allowed balanced or backslash-escaped.
pub fn parse_link_destination(s: &str) -> Option<(String, usize)> {
    let bytes = s.as_bytes();
    if bytes.first() == Some(&b'<') {
        let mut out = String::new();
        let chars: Vec<(usize, char)> = s.char_indices().skip(1).collect();
        let mut ci = 0;
        while ci < chars.len() {
            let (boff, ch) = chars[ci];
            match ch {
                '>' => return Some((out, boff + 1)),
                '\\' => {
                    if let Some(&(_, next)) = chars.get(ci + 1) {
                        if is_ascii_punct(next) {
                            out.push(next);
                            ci += 2;
                            continue;
                        }
                    }
                    out.push('\\');
                    ci += 1;
                }
                '<' | '\n' => return None,
                other => {
                    out.push(other);
                    ci += 1;
                }
            }
        }
        None
    } else {
        let mut out = String::new();
        let mut depth: i32 = 0;
        let mut consumed = 0usize;
        let mut chars = s.char_indices().peekable();
        let mut any = false;
        while let Some((boff, ch)) = chars.next() {
            if ch.is_whitespace() || ch.is_control() {
                break;
            }
            match ch {
                '(' => {
                    depth += 1;
                    out.push(ch);
                    consumed = boff + ch.len_utf8();
                    any = true;
                }
                ')' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    out.push(ch);
                    consumed = boff + ch.len_utf8();
                    any = true;
                }
                '\\' => {
                    if let Some(&(_, next)) = chars.peek() {
                        if is_ascii_punct(next) {
                            out.push(next);
                            chars.next();
                            consumed = boff + ch.len_utf8() + next.len_utf8();
                            any = true;
                            continue;
                        }
                    }
                    out.push(ch);
                    consumed = boff + ch.len_utf8();
                    any = true;
                }
                other => {
                    out.push(other);
                    consumed = boff + other.len_utf8();
                    any = true;
                }
            }
        }
        if !any || depth != 0 {
            return None;
        }
        Some((out, consumed))
    }
}

/// Parses a link title delimited by `"…"`, `'…'`, or balanced `(…)`.
/// Backslash escapes are honored; a blank line inside the title is
/// forbidden.
pub fn parse_link_title(s: &str) -> Option<(String, usize)> {
    let open = s.chars().next()?;
    let close = match open {
        '"' => '"',
        '\'' => '\'',
        '(' => ')',
        _ => return None,
    };
    let mut out = String::new();
    let mut chars = s.char_indices().skip(1).peekable();
    let mut blank_run = 0;
    while let Some((boff, ch)) = chars.next() {
        if ch == close {
            return Some((out, boff + ch.len_utf8()));
        }
        if ch == '\\' {
            if let Some(&(_, next)) = chars.peek() {
                if is_ascii_punct(next) {
                    out.push(next);
                    chars.next();
                    blank_run = 0;
                    continue;
                }
            }
            out.push(ch);
            continue;
        }
        if ch == '\n' {
            blank_run += 1;
            // two consecutive newlines (a blank line) is forbidden
            let mut clone = chars.clone();
            if let Some(&(_, next)) = clone.peek() {
                if next == '\n' {
                    return None;
                }
            }
            out.push(ch);
            continue;
        }
        blank_run = 0;
        out.push(ch);
    }
    let _ = blank_run;
    None
}

/// Parses a `[ … ]` link label. Returns the raw (unnormalized) label text
/// and bytes consumed including both brackets. Rejects unescaped `[`
/// inside, and labels longer than 999 characters.
pub fn parse_link_label(s: &str) -> Option<(String, usize)> {
    if !s.starts_with('[') {
        return None;
    }
    let mut out = String::new();
    let mut chars = s.char_indices().skip(1).peekable();
    let mut len = 0usize;
    while let Some((boff, ch)) = chars.next() {
        match ch {
            ']' => {
                if out.trim().is_empty() {
                    return None;
                }
                return Some((out, boff + 1));
            }
            '[' => return None,
            '\\' => {
                out.push(ch);
                len += 1;
                if let Some(&(_, next)) = chars.peek() {
                    out.push(next);
                    chars.next();
                    len += 1;
                }
            }
            other => {
                out.push(other);
                len += 1;
            }
        }
        if len > 999 {
            return None;
        }
    }
    None
}

fn is_ascii_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_angle_form() {
        let (url, consumed) = parse_link_destination("<http://e.com>x").unwrap();
        assert_eq!(url, "http://e.com");
        assert_eq!(&"<http://e.com>x"[..consumed], "<http://e.com>");
    }

    #[test]
    fn destination_bare_form_balances_parens() {
        let (url, consumed) = parse_link_destination("http://e.com/(a(b)c) rest").unwrap();
        assert_eq!(url, "http://e.com/(a(b)c)");
        assert_eq!(consumed, url.len());
    }

    #[test]
    fn destination_bare_form_rejects_unbalanced_paren() {
        assert!(parse_link_destination("http://e.com/(a").is_none());
    }

    #[test]
    fn title_double_quoted() {
        let (title, consumed) = parse_link_title("\"hello \\\"world\\\"\"x").unwrap();
        assert_eq!(title, "hello \"world\"");
        assert_eq!(consumed, "\"hello \\\"world\\\"\"".len());
    }

    #[test]
    fn title_rejects_blank_line() {
        assert!(parse_link_title("\"abc\n\ndef\"").is_none());
    }

    #[test]
    fn label_rejects_unescaped_bracket() {
        assert!(parse_link_label("[a[b]").is_none());
    }

    #[test]
    fn label_rejects_empty() {
        assert!(parse_link_label("[ ]").is_none());
    }
}
