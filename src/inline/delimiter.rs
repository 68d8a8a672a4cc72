//! The delimiter stack / emphasis resolution algorithm (C8): turns runs of
//! `*`, `_` (emphasis/strong) and `~~` (GFM strikethrough) into nested
//! `Emphasis`/`Strong`/`Strikethrough` nodes, honoring flanking rules and
//! the "multiple of 3" rule.

use crate::scanner::{is_unicode_punctuation, is_unicode_whitespace};
use crate::tree::{InlineKind, Node, NodeKind, Span};

/// Determines whether a run of `ch` bounded by `before`/`after` (the
/// characters immediately outside the run, if any) can open and/or close
/// emphasis, per CommonMark §6.2.
pub fn flanking(before: Option<char>, after: Option<char>, ch: char) -> (bool, bool) {
    let before_ws = before.map(is_unicode_whitespace).unwrap_or(true);
    let after_ws = after.map(is_unicode_whitespace).unwrap_or(true);
    let before_punct = before.map(is_unicode_punctuation).unwrap_or(false);
    let after_punct = after.map(is_unicode_punctuation).unwrap_or(false);

    let left_flanking = !after_ws && (!after_punct || before_ws || before_punct);
    let right_flanking = !before_ws && (!before_punct || after_ws || after_punct);

    if ch == '_' {
        let can_open = left_flanking && (!right_flanking || before_punct);
        let can_close = right_flanking && (!left_flanking || after_punct);
        (can_open, can_close)
    } else {
        (left_flanking, right_flanking)
    }
}

/// Resolves every delimiter run in `nodes` in place, replacing matched
/// pairs with `Emphasis`/`Strong`/`Strikethrough` wrapper nodes and
/// flattening anything left unmatched back into literal text.
pub fn resolve(nodes: &mut Vec<Node>) {
    while try_one_match(nodes) {}
    flatten_leftover(nodes);
}

struct DelimView {
    idx: usize,
    ch: char,
    run: usize,
    can_open: bool,
    can_close: bool,
    original_length: usize,
}

fn collect(nodes: &[Node]) -> Vec<DelimView> {
    nodes
        .iter()
        .enumerate()
        .filter_map(|(idx, n)| match &n.kind {
            NodeKind::Inline(InlineKind::Delimiter { ch, run, can_open, can_close, original_length }) if *run > 0 => {
                Some(DelimView { idx, ch: *ch, run: *run, can_open: *can_open, can_close: *can_close, original_length: *original_length })
            }
            _ => None,
        })
        .collect()
}

fn try_one_match(nodes: &mut Vec<Node>) -> bool {
    let delims = collect(nodes);
    for (i, closer) in delims.iter().enumerate() {
        if !closer.can_close {
            continue;
        }
        let mut opener_pos = None;
        for j in (0..i).rev() {
            let opener = &delims[j];
            if opener.ch != closer.ch || !opener.can_open {
                continue;
            }
            if closer.ch != '~' {
                let odd_rule_blocks = (opener.can_close || closer.can_open)
                    && (opener.original_length % 3 == 0 || closer.original_length % 3 == 0)
                    && (opener.run + closer.run) % 3 == 0;
                if odd_rule_blocks {
                    continue;
                }
            }
            opener_pos = Some(j);
            break;
        }

        let Some(j) = opener_pos else { continue };
        let opener = &delims[j];
        let opener_idx = opener.idx;
        let closer_idx = closer.idx;

        let take = if closer.ch == '~' {
            2.min(opener.run).min(closer.run)
        } else if opener.run >= 2 && closer.run >= 2 {
            2
        } else {
            1
        };

        let kind = if closer.ch == '~' {
            InlineKind::Strikethrough
        } else if take == 2 {
            InlineKind::Strong
        } else {
            InlineKind::Emphasis
        };

        let interior: Vec<Node> = nodes[opener_idx + 1..closer_idx].to_vec();
        let wrapped = Node::inline_with_children(kind, Span::empty(0), interior);

        reduce_run(&mut nodes[opener_idx], take);
        reduce_run(&mut nodes[closer_idx], take);

        let remove_opener = run_of(&nodes[opener_idx]) == 0;
        let start = if remove_opener { opener_idx } else { opener_idx + 1 };
        nodes.splice(start..=closer_idx, std::iter::once(wrapped));
        return true;
    }
    false
}

fn reduce_run(node: &mut Node, by: usize) {
    if let NodeKind::Inline(InlineKind::Delimiter { run, .. }) = &mut node.kind {
        *run = run.saturating_sub(by);
    }
}

fn run_of(node: &Node) -> usize {
    match &node.kind {
        NodeKind::Inline(InlineKind::Delimiter { run, .. }) => *run,
        _ => 0,
    }
}

fn flatten_leftover(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let NodeKind::Inline(InlineKind::Delimiter { ch, run, .. }) = &node.kind {
            if *run > 0 {
                node.kind = NodeKind::Inline(InlineKind::Text(ch.to_string().repeat(*run)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delim(ch: char, run: usize, can_open: bool, can_close: bool) -> Node {
        Node::inline(InlineKind::Delimiter { ch, run, can_open, can_close, original_length: run }, Span::empty(0))
    }

    fn text(s: &str) -> Node {
        Node::inline(InlineKind::Text(s.to_string()), Span::empty(0))
    }

    #[test]
    fn flanking_simple_asterisk() {
        let (open, close) = flanking(Some(' '), Some('a'), '*');
        assert!(open);
        assert!(!close);
    }

    #[test]
    fn underscore_intraword_cannot_open() {
        let (open, _) = flanking(Some('a'), Some('b'), '_');
        assert!(!open);
    }

    #[test]
    fn resolves_simple_emphasis() {
        let mut nodes = vec![delim('*', 1, true, false), text("hi"), delim('*', 1, false, true)];
        resolve(&mut nodes);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0].kind, NodeKind::Inline(InlineKind::Emphasis)));
        assert_eq!(nodes[0].children.len(), 1);
    }

    #[test]
    fn resolves_strong_from_double_run() {
        let mut nodes = vec![delim('*', 2, true, false), text("hi"), delim('*', 2, false, true)];
        resolve(&mut nodes);
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0].kind, NodeKind::Inline(InlineKind::Strong)));
    }

    #[test]
    fn unmatched_delimiter_becomes_text() {
        let mut nodes = vec![delim('*', 1, true, false), text("hi")];
        resolve(&mut nodes);
        assert_eq!(nodes.len(), 2);
        assert!(matches!(&nodes[0].kind, NodeKind::Inline(InlineKind::Text(t)) if t == "*"));
    }
}
