//! Code blocks (CommonMark §4.4-4.5): indented and fenced.
//!
//! Indented code has no start-pattern of its own beyond ">=4 columns of
//! indentation", which the driver checks directly via
//! `scanner::consume_indent`; this module only holds the fenced-code info
//! string extraction, since `scanner::fence` stops at the fence marker.

/// Splits a fence's trailing text into the info string (first whitespace
/// run delimited word, used as the code language) after trimming.
pub fn info_string(rest_of_line: &str) -> String {
    rest_of_line.trim().to_string()
}

/// The language tag is the info string's first whitespace-delimited word,
/// per CommonMark's "first word of the info string".
pub fn language_tag(info: &str) -> Option<&str> {
    info.split_whitespace().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tag_is_first_word() {
        assert_eq!(language_tag("rust ignore"), Some("rust"));
        assert_eq!(language_tag("  "), None);
    }
}
