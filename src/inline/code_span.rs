//! Code spans (CommonMark §6.3): backtick runs, matched by exact length,
//! first and last.

/// If `s` starts with a run of backticks, attempts to find a matching
/// closing run of the same length and returns `(content, bytes_consumed)`.
/// Content has line endings collapsed to a single space, and a single
/// leading and trailing space stripped if both are present and the
/// content isn't all spaces.
pub fn parse_code_span(s: &str) -> Option<(String, usize)> {
    let open_len = s.chars().take_while(|&c| c == '`').count();
    if open_len == 0 {
        return None;
    }
    let rest = &s[open_len..];
    let mut search = rest;
    let mut offset = open_len;
    loop {
        let next_tick = search.find('`')?;
        let run_start = offset + next_tick;
        let run_len = s[run_start..].chars().take_while(|&c| c == '`').count();
        if run_len == open_len {
            let raw = &s[open_len..run_start];
            return Some((normalize_code_span(raw), run_start + run_len));
        }
        offset = run_start + run_len;
        search = &s[offset..];
    }
}

fn normalize_code_span(raw: &str) -> String {
    let collapsed: String = raw
        .split('\n')
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .map(|c| if c == '\r' { ' ' } else { c })
        .collect();
    let trimmed_candidate = collapsed.strip_prefix(' ').and_then(|s| s.strip_suffix(' '));
    match trimmed_candidate {
        Some(inner) if !inner.trim().is_empty() || inner.is_empty() => {
            if collapsed.chars().all(|c| c == ' ') {
                collapsed
            } else {
                inner.to_string()
            }
        }
        _ => collapsed,
    }
}
