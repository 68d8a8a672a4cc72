//! Reference table (C6): normalized link label → (url, title).
//!
//! Populated by `Reference` block tokens during block parsing, consulted by
//! the link/image inline parsers during the inline pass. First definition
//! for a label wins; references and their use may appear in either
//! document order.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDef {
    pub url: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: HashMap<String, ReferenceDef>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Inserts a definition if (and only if) no definition for this label
    /// has been recorded yet: "first definition wins" (spec.md §4.6).
    pub fn insert(&mut self, label: &str, url: String, title: Option<String>) {
        let key = normalize_label(label);
        if key.is_empty() {
            return;
        }
        self.entries.entry(key).or_insert(ReferenceDef { url, title });
    }

    pub fn get(&self, label: &str) -> Option<&ReferenceDef> {
        self.entries.get(&normalize_label(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(&normalize_label(label))
    }
}

/// Case-fold, strip, and collapse internal whitespace runs to a single
/// space (spec.md §4.1 "Link label" / §4.6). Idempotent:
/// `normalize(normalize(l)) == normalize(l)`.
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_was_space = true; // strips leading whitespace
    for ch in label.trim().chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            for folded in ch.to_lowercase() {
                out.push(folded);
            }
            last_was_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case_folds() {
        assert_eq!(normalize_label("  Foo   Bar\n Baz "), "foo bar baz");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_label("  Foo   Bar ");
        let twice = normalize_label(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn first_definition_wins() {
        let mut table = ReferenceTable::new();
        table.insert("foo", "first".into(), None);
        table.insert("FOO", "second".into(), None);
        assert_eq!(table.get("foo").unwrap().url, "first");
    }

    #[test]
    fn lookup_is_label_normalized() {
        let mut table = ReferenceTable::new();
        table.insert("My Label", "/x".into(), Some("t".into()));
        assert!(table.contains("my   label"));
        assert_eq!(table.get("  MY LABEL ").unwrap().url, "/x");
    }
}
