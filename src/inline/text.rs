//! Fallback text runs and line breaks (CommonMark §6.1, §6.8).

/// At a newline in raw paragraph text, determines whether it's a hard
/// break (trailing `\` or 2+ trailing spaces before the `\n`) or a soft
/// break, and returns the number of trailing-whitespace bytes on the
/// *preceding* line that the break consumes (so the caller can trim them
/// off the accumulated text run).
pub enum Break {
    Hard { trim_trailing: usize },
    Soft,
}

pub fn classify_break(preceding: &str) -> Break {
    if let Some(stripped) = preceding.strip_suffix('\\') {
        let _ = stripped;
        return Break::Hard { trim_trailing: 1 };
    }
    let trailing_spaces = preceding.len() - preceding.trim_end_matches(' ').len();
    if trailing_spaces >= 2 {
        Break::Hard { trim_trailing: trailing_spaces }
    } else {
        Break::Soft
    }
}

/// Bytes of `s` that form a plain-text run before the next character that
/// could start a more specific inline construct.
pub fn text_run_len(s: &str) -> usize {
    let specials = ['\\', '`', '*', '_', '[', ']', '<', '&', '!', '\n', '~'];
    match s.find(specials) {
        Some(0) => s.chars().next().map(|c| c.len_utf8()).unwrap_or(1),
        Some(i) => i,
        None => s.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslash_before_newline_is_hard_break() {
        assert!(matches!(classify_break("hi\\"), Break::Hard { trim_trailing: 1 }));
    }

    #[test]
    fn two_trailing_spaces_is_hard_break() {
        assert!(matches!(classify_break("hi  "), Break::Hard { trim_trailing: 2 }));
    }

    #[test]
    fn single_trailing_space_is_soft_break() {
        assert!(matches!(classify_break("hi "), Break::Soft));
    }

    #[test]
    fn text_run_stops_at_special_char() {
        assert_eq!(text_run_len("hello *world*"), 6);
    }
}
