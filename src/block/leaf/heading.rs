//! ATX and Setext headings (CommonMark §4.2-4.3).

/// Parses an ATX heading: <=3 indent, 1-6 `#`, then a space/tab or EOL,
/// then text with any trailing run of `#` (preceded by whitespace)
/// stripped. Returns `(level, text)`.
pub fn parse_atx(line: &str) -> Option<(u8, String)> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let level = rest.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let after_hashes = &rest[level..];
    if !after_hashes.is_empty()
        && !after_hashes.starts_with(' ')
        && !after_hashes.starts_with('\t')
    {
        return None;
    }
    let mut text = after_hashes.trim_start_matches([' ', '\t']).trim_end();
    // Strip an optional closing sequence of `#`s, itself preceded by
    // whitespace (or the whole remaining text being only `#`s).
    let trimmed_hashes = text.trim_end_matches('#');
    if trimmed_hashes.len() != text.len() {
        if trimmed_hashes.is_empty() || trimmed_hashes.ends_with([' ', '\t']) {
            text = trimmed_hashes.trim_end();
        }
    }
    Some((level as u8, text.to_string()))
}

/// True if `line` is a Setext underline: <=3 indent, a run of only `=`
/// (level 1) or only `-` (level 2), trailing spaces allowed.
pub fn parse_setext_underline(line: &str) -> Option<u8> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = line[indent..].trim_end();
    if rest.is_empty() {
        return None;
    }
    if rest.chars().all(|c| c == '=') {
        Some(1)
    } else if rest.chars().all(|c| c == '-') {
        Some(2)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atx_basic() {
        assert_eq!(parse_atx("# Hello"), Some((1, "Hello".to_string())));
        assert_eq!(parse_atx("###### six"), Some((6, "six".to_string())));
    }

    #[test]
    fn atx_rejects_seven_hashes() {
        assert_eq!(parse_atx("####### x"), None);
    }

    #[test]
    fn atx_requires_space_after_hashes() {
        assert_eq!(parse_atx("#hello"), None);
    }

    #[test]
    fn atx_strips_closing_sequence() {
        assert_eq!(parse_atx("## Hello ##"), Some((2, "Hello".to_string())));
    }

    #[test]
    fn atx_closing_hashes_need_preceding_space() {
        assert_eq!(parse_atx("## Hello#"), Some((2, "Hello#".to_string())));
    }

    #[test]
    fn atx_empty_heading() {
        assert_eq!(parse_atx("#"), Some((1, String::new())));
    }

    #[test]
    fn setext_level_1_and_2() {
        assert_eq!(parse_setext_underline("==="), Some(1));
        assert_eq!(parse_setext_underline("---"), Some(2));
    }

    #[test]
    fn setext_rejects_mixed() {
        assert_eq!(parse_setext_underline("=-="), None);
    }
}
