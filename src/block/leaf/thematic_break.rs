//! Thematic breaks (CommonMark §4.1): `***`, `---`, `___`, loosely spaced.

/// True if `line` (already past container prefixes, at most 3 columns of
/// indentation) is a thematic break: a run of 3+ of the same character
/// among `*`, `_`, `-`, with any number of interior spaces/tabs and
/// nothing else.
pub fn is_thematic_break(line: &str) -> bool {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return false;
    }
    let rest = &line[indent..];
    let mut marker = None;
    let mut count = 0;
    for c in rest.chars() {
        match c {
            '*' | '_' | '-' => {
                match marker {
                    None => marker = Some(c),
                    Some(m) if m == c => {}
                    Some(_) => return false,
                }
                count += 1;
            }
            ' ' | '\t' => {}
            _ => return false,
        }
    }
    count >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_three_markers() {
        assert!(is_thematic_break("***"));
        assert!(is_thematic_break("---"));
        assert!(is_thematic_break("___"));
    }

    #[test]
    fn allows_interior_spacing() {
        assert!(is_thematic_break("* * *"));
        assert!(is_thematic_break(" - - -   "));
    }

    #[test]
    fn rejects_mixed_markers() {
        assert!(!is_thematic_break("*-*"));
    }

    #[test]
    fn rejects_too_few() {
        assert!(!is_thematic_break("--"));
    }

    #[test]
    fn rejects_other_content() {
        assert!(!is_thematic_break("-- a --"));
    }
}
