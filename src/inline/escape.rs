//! Backslash escapes (CommonMark §6.1): `\` followed by ASCII punctuation
//! is a literal escape; a `\` before a newline is a hard line break
//! handled in `inline::text`; any other `\` is a literal backslash.

/// If `s` starts with `\` followed by ASCII punctuation, returns the
/// escaped character and bytes consumed (always 2).
pub fn parse_escape(s: &str) -> Option<(char, usize)> {
    let mut chars = s.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let c = chars.next()?;
    if c.is_ascii_punctuation() {
        Some((c, 1 + c.len_utf8()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_punctuation() {
        assert_eq!(parse_escape("\\*x"), Some(('*', 2)));
    }

    #[test]
    fn does_not_escape_letters() {
        assert_eq!(parse_escape("\\a"), None);
    }
}
