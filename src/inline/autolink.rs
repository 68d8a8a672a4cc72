//! Autolinks (CommonMark §6.5): `<scheme:...>` and `<user@host>`, plus the
//! GFM "autolink (extension)" bare-URL/email forms.

/// Parses a CommonMark autolink `<...>`. Returns `(url, is_email, bytes)`.
pub fn parse_autolink(s: &str) -> Option<(String, bool, usize)> {
    if !s.starts_with('<') {
        return None;
    }
    let end = s[1..].find('>')? + 1;
    let inner = &s[1..end];
    if inner.contains(char::is_whitespace) || inner.is_empty() {
        return None;
    }
    if is_uri_autolink(inner) {
        return Some((inner.to_string(), false, end + 1));
    }
    if is_email_autolink(inner) {
        return Some((inner.to_string(), true, end + 1));
    }
    None
}

fn is_uri_autolink(s: &str) -> bool {
    let Some(colon) = s.find(':') else { return false };
    let scheme = &s[..colon];
    if scheme.len() < 2 || scheme.len() > 32 {
        return false;
    }
    let mut chars = scheme.chars();
    if !chars.next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false) {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-')) {
        return false;
    }
    s[colon + 1..].chars().all(|c| !c.is_control())
}

fn is_email_autolink(s: &str) -> bool {
    let Some(at) = s.find('@') else { return false };
    let (local, domain) = (&s[..at], &s[at + 1..]);
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local.chars().all(|c| c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c));
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 1 {
        return false;
    }
    let labels_ok = labels.iter().all(|l| {
        !l.is_empty()
            && l.len() <= 63
            && !l.starts_with('-')
            && !l.ends_with('-')
            && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    local_ok && labels_ok && labels.len() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_autolink() {
        let (url, email, consumed) = parse_autolink("<http://example.com>x").unwrap();
        assert_eq!(url, "http://example.com");
        assert!(!email);
        assert_eq!(consumed, "<http://example.com>".len());
    }

    #[test]
    fn email_autolink() {
        let (url, email, _) = parse_autolink("<foo@bar.com>").unwrap();
        assert_eq!(url, "foo@bar.com");
        assert!(email);
    }

    #[test]
    fn rejects_space_inside() {
        assert!(parse_autolink("<not an autolink>").is_none());
    }

    #[test]
    fn rejects_short_scheme() {
        assert!(parse_autolink("<a:b>").is_none());
    }
}
