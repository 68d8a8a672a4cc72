//! Raw inline HTML (CommonMark §6.9): a single open tag, closing tag,
//! comment, processing instruction, declaration, or CDATA section,
//! matched anywhere inline rather than as a whole-line block construct.

/// If `s` starts with a complete inline HTML construct, returns its text
/// and byte length.
pub fn parse_html_inline(s: &str) -> Option<(String, usize)> {
    if !s.starts_with('<') {
        return None;
    }
    if let Some(end) = find_terminator(s, "-->", "<!--") {
        return Some((s[..end].to_string(), end));
    }
    if let Some(end) = find_terminator(s, "?>", "<?") {
        return Some((s[..end].to_string(), end));
    }
    if let Some(end) = find_terminator(s, "]]>", "<![CDATA[") {
        return Some((s[..end].to_string(), end));
    }
    if s[1..].starts_with('!') && s[2..].chars().next().map(|c| c.is_ascii_alphabetic()) == Some(true) {
        let end = s.find('>')? + 1;
        return Some((s[..end].to_string(), end));
    }
    parse_tag(s)
}

fn find_terminator(s: &str, terminator: &str, prefix: &str) -> Option<usize> {
    if !s.starts_with(prefix) {
        return None;
    }
    let rel = s[prefix.len()..].find(terminator)?;
    Some(prefix.len() + rel + terminator.len())
}

fn parse_tag(s: &str) -> Option<(String, usize)> {
    let is_close = s[1..].starts_with('/');
    let name_start = if is_close { 2 } else { 1 };
    let name: String = s[name_start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if name.is_empty() || !name.chars().next().unwrap().is_ascii_alphabetic() {
        return None;
    }
    let mut i = name_start + name.len();
    let bytes = s.as_bytes();

    if is_close {
        while i < bytes.len() && (bytes[i] as char).is_whitespace() {
            i += 1;
        }
        if bytes.get(i) == Some(&b'>') {
            return Some((s[..=i].to_string(), i + 1));
        }
        return None;
    }

    loop {
        while i < bytes.len() && (bytes[i] as char).is_whitespace() {
            i += 1;
        }
        if s[i..].starts_with("/>") {
            return Some((s[..i + 2].to_string(), i + 2));
        }
        if bytes.get(i) == Some(&b'>') {
            return Some((s[..=i].to_string(), i + 1));
        }
        let attr_start = i;
        let name_len = s[i..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
            .count();
        if name_len == 0 {
            return None;
        }
        i += name_len;
        while i < bytes.len() && (bytes[i] as char).is_whitespace() {
            i += 1;
        }
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < bytes.len() && (bytes[i] as char).is_whitespace() {
                i += 1;
            }
            match bytes.get(i) {
                Some(b'"') => {
                    let rel = s[i + 1..].find('"')?;
                    i += 1 + rel + 1;
                }
                Some(b'\'') => {
                    let rel = s[i + 1..].find('\'')?;
                    i += 1 + rel + 1;
                }
                Some(_) => {
                    let len = s[i..]
                        .chars()
                        .take_while(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | '=' | '<' | '>' | '`'))
                        .count();
                    if len == 0 {
                        return None;
                    }
                    i += len;
                }
                None => return None,
            }
        } else if attr_start == i {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_open_tag() {
        let (text, consumed) = parse_html_inline("<a href=\"x\">rest").unwrap();
        assert_eq!(text, "<a href=\"x\">");
        assert_eq!(consumed, text.len());
    }

    #[test]
    fn self_closing_tag() {
        assert!(parse_html_inline("<br/>").is_some());
    }

    #[test]
    fn closing_tag() {
        let (text, _) = parse_html_inline("</a>x").unwrap();
        assert_eq!(text, "</a>");
    }

    #[test]
    fn comment() {
        let (text, _) = parse_html_inline("<!-- hi -->x").unwrap();
        assert_eq!(text, "<!-- hi -->");
    }

    #[test]
    fn rejects_unterminated_tag() {
        assert!(parse_html_inline("<a href=\"x").is_none());
    }
}
