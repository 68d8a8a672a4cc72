//! HTML block start-pattern recognition (spec.md §4.1, seven variants).

const RAW_TAGS: [&str; 4] = ["script", "pre", "style", "textarea"];

const BLOCK_TAGS: [&str; 62] = [
    "address", "article", "aside", "base", "basefont", "blockquote", "body",
    "caption", "center", "col", "colgroup", "dd", "details", "dialog", "dir",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "frame", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header",
    "hr", "html", "iframe", "legend", "li", "link", "main", "menu",
    "menuitem", "nav", "noframes", "ol", "optgroup", "option", "p", "param",
    "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead",
    "title", "tr", "track", "ul",
];

/// Returns the HTML block variant (1..=7) that `line` opens, if any. `line`
/// should be the trimmed-of-up-to-3-spaces start of a potential HTML block.
pub fn detect_html_block_variant(line: &str) -> Option<u8> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    if !rest.starts_with('<') {
        return None;
    }

    if let Some(tag_rest) = rest.strip_prefix("<!--") {
        let _ = tag_rest;
        return Some(2);
    }
    if rest.starts_with("<?") {
        return Some(3);
    }
    if let Some(after) = rest.strip_prefix("<!") {
        if after.chars().next().map(|c| c.is_ascii_alphabetic()) == Some(true) {
            return Some(4);
        }
        if after.starts_with("[CDATA[") {
            return Some(5);
        }
    }

    let (is_close, after_bracket) = if let Some(a) = rest.strip_prefix("</") {
        (true, a)
    } else {
        (false, &rest[1..])
    };
    let tag_name: String = after_bracket
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if tag_name.is_empty() {
        return None;
    }
    let lower = tag_name.to_ascii_lowercase();
    let after_tag = &after_bracket[tag_name.len()..];

    if RAW_TAGS.contains(&lower.as_str()) {
        // Type 1 requires the tag to be followed by whitespace, '>', or EOL.
        let ok = after_tag.is_empty()
            || after_tag.starts_with(|c: char| c.is_whitespace())
            || after_tag.starts_with('>');
        if ok {
            return Some(1);
        }
    }

    if BLOCK_TAGS.contains(&lower.as_str()) {
        // Type 6 requires the tag to be followed by whitespace, '>', "/>",
        // or end of line.
        let ok = after_tag.is_empty()
            || after_tag.starts_with(|c: char| c.is_whitespace())
            || after_tag.starts_with('>')
            || after_tag.starts_with("/>");
        if ok {
            return Some(6);
        }
    }

    // Type 7: a complete open or close tag (with only whitespace after on
    // the line), any tag name. Cannot interrupt a paragraph (enforced by
    // the caller).
    if is_complete_tag_line(rest) {
        let _ = is_close;
        return Some(7);
    }

    None
}

fn is_complete_tag_line(rest: &str) -> bool {
    // crude but adequate: find the matching '>' for the first '<...>' and
    // require only whitespace after it.
    let Some(end) = rest.find('>') else { return false };
    rest[end + 1..].trim().is_empty()
}

/// End-condition check for a given variant against a content line (used by
/// the HTML block leaf parser to decide where the block closes).
pub fn html_block_end_matches(variant: u8, line: &str) -> bool {
    match variant {
        1 => {
            let lower = line.to_ascii_lowercase();
            RAW_TAGS.iter().any(|t| lower.contains(&format!("</{t}>")))
        }
        2 => line.contains("-->"),
        3 => line.contains("?>"),
        4 => line.contains('>'),
        5 => line.contains("]]>"),
        6 | 7 => false, // these close on the next blank line
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_script_tag_as_type_1() {
        assert_eq!(detect_html_block_variant("<script>"), Some(1));
        assert_eq!(detect_html_block_variant("<pre class=\"x\">"), Some(1));
    }

    #[test]
    fn detects_comment_as_type_2() {
        assert_eq!(detect_html_block_variant("<!-- hi"), Some(2));
    }

    #[test]
    fn detects_processing_instruction_as_type_3() {
        assert_eq!(detect_html_block_variant("<?php"), Some(3));
    }

    #[test]
    fn detects_declaration_as_type_4() {
        assert_eq!(detect_html_block_variant("<!DOCTYPE html>"), Some(4));
    }

    #[test]
    fn detects_cdata_as_type_5() {
        assert_eq!(detect_html_block_variant("<![CDATA[hi"), Some(5));
    }

    #[test]
    fn detects_known_block_tag_as_type_6() {
        assert_eq!(detect_html_block_variant("<div>"), Some(6));
        assert_eq!(detect_html_block_variant("<div id=\"x\">"), Some(6));
        assert_eq!(detect_html_block_variant("</table>"), Some(6));
    }

    #[test]
    fn detects_complete_tag_on_own_line_as_type_7() {
        assert_eq!(detect_html_block_variant("<custom-tag foo=\"bar\">"), Some(7));
    }

    #[test]
    fn unknown_tag_with_trailing_text_is_not_type_7() {
        assert_eq!(detect_html_block_variant("<custom-tag> hi"), None);
    }
}
