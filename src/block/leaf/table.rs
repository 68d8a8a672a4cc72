//! GFM pipe tables: a paragraph's first line becomes a table header once
//! the immediately following line is a valid delimiter row.

use crate::tree::Alignment;

/// Splits a table row into cell texts, honoring backslash-escaped pipes
/// and a leading/trailing `|` (both optional). Whitespace at each cell's
/// edges is trimmed.
pub fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push(c);
                if let Some(&next) = chars.peek() {
                    current.push(next);
                    chars.next();
                }
            }
            '|' => {
                cells.push(current.trim().to_string());
                current = String::new();
            }
            other => current.push(other),
        }
    }
    cells.push(current.trim().to_string());

    // Drop one leading/trailing empty cell caused by an edge pipe.
    if cells.first().map(|c| c.is_empty()) == Some(true) && cells.len() > 1 {
        cells.remove(0);
    }
    if cells.last().map(|c| c.is_empty()) == Some(true) && cells.len() > 1 {
        cells.pop();
    }
    cells.iter().map(|c| unescape_pipe(c)).collect()
}

fn unescape_pipe(s: &str) -> String {
    s.replace("\\|", "|")
}

/// Parses a delimiter row (`| --- | :---: | ---: |`) into its per-column
/// alignments, or `None` if `line` isn't a valid delimiter row.
pub fn parse_delimiter_row(line: &str) -> Option<Vec<Alignment>> {
    let cells = split_row(line);
    if cells.is_empty() {
        return None;
    }
    let mut aligns = Vec::with_capacity(cells.len());
    for cell in &cells {
        let c = cell.trim();
        if c.is_empty() || !c.chars().all(|ch| ch == '-' || ch == ':') {
            return None;
        }
        if !c.contains('-') {
            return None;
        }
        let left = c.starts_with(':');
        let right = c.ends_with(':');
        aligns.push(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        });
    }
    Some(aligns)
}
