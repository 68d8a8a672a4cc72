//! Inline content parsing (C7-C8): tokenizes a leaf block's raw text into
//! inline nodes, resolves link/image brackets, then resolves emphasis and
//! strikethrough delimiter runs.

pub mod autolink;
pub mod code_span;
pub mod delimiter;
pub mod entity;
pub mod escape;
pub mod html_inline;
pub mod link;
pub mod strikethrough;
pub mod text;

use crate::config::Config;
use crate::refs::ReferenceTable;
use crate::tree::{InlineKind, Node, NodeKind, Span};

/// A caller-supplied inline recognizer, tried after every built-in (C7's
/// custom parser injection point, symmetric with `block::LeafBlockParser`).
pub trait InlineParser: Send + Sync {
    fn name(&self) -> &str;
    fn try_parse(&self, text: &str) -> Option<InlineStart>;
}

pub struct InlineStart {
    pub node: Node,
    pub consumed: usize,
}

struct BracketMark {
    node_idx: usize,
    is_image: bool,
    active: bool,
}

/// Parses `text` (a leaf block's raw inline content) into a flat,
/// fully-resolved list of inline nodes.
pub fn parse_inlines(text: &str, refs: &ReferenceTable, config: &Config, extensions: &[Box<dyn InlineParser>]) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut brackets: Vec<BracketMark> = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((ch, len)) = escape::parse_escape(rest) {
            nodes.push(Node::inline(InlineKind::Escape(ch), Span::empty(0)));
            rest = &rest[len..];
            continue;
        }
        if let Some((content, len)) = entity::parse_entity(rest) {
            nodes.push(Node::inline(InlineKind::HtmlEntity(content), Span::empty(0)));
            rest = &rest[len..];
            continue;
        }
        if let Some((content, len)) = code_span::parse_code_span(rest) {
            nodes.push(Node::inline(InlineKind::CodeSpan(content), Span::empty(0)));
            rest = &rest[len..];
            continue;
        }
        if let Some((url, email, len)) = autolink::parse_autolink(rest) {
            let display = Node::inline(InlineKind::Text(url.clone()), Span::empty(0));
            nodes.push(Node::inline_with_children(InlineKind::Autolink { email }, Span::empty(0), vec![display]));
            rest = &rest[len..];
            continue;
        }
        if rest.starts_with('<') {
            if let Some((content, len)) = html_inline::parse_html_inline(rest) {
                nodes.push(Node::inline(InlineKind::HtmlInline(content), Span::empty(0)));
                rest = &rest[len..];
                continue;
            }
        }
        if rest.starts_with('\n') {
            let preceding = nodes.iter().rev().find_map(|n| match &n.kind {
                NodeKind::Inline(InlineKind::Text(t)) => Some(t.clone()),
                _ => None,
            });
            let is_hard = preceding.map(|p| matches!(text::classify_break(&p), text::Break::Hard { .. })).unwrap_or(false);
            if is_hard {
                if let Some(last) = nodes.last_mut() {
                    if let NodeKind::Inline(InlineKind::Text(t)) = &mut last.kind {
                        let trimmed = t.trim_end_matches([' ', '\\']).to_string();
                        *t = trimmed;
                    }
                }
                nodes.push(Node::inline(InlineKind::HardBreak, Span::empty(0)));
            } else {
                if let Some(last) = nodes.last_mut() {
                    if let NodeKind::Inline(InlineKind::Text(t)) = &mut last.kind {
                        *t = t.trim_end_matches(' ').to_string();
                    }
                }
                nodes.push(Node::inline(InlineKind::SoftBreak, Span::empty(0)));
            }
            rest = &rest[1..];
            continue;
        }
        if rest.starts_with('!') && rest[1..].starts_with('[') {
            nodes.push(Node::inline(InlineKind::Text("![".to_string()), Span::empty(0)));
            brackets.push(BracketMark { node_idx: nodes.len() - 1, is_image: true, active: true });
            rest = &rest[2..];
            continue;
        }
        if rest.starts_with('[') {
            nodes.push(Node::inline(InlineKind::Text("[".to_string()), Span::empty(0)));
            brackets.push(BracketMark { node_idx: nodes.len() - 1, is_image: false, active: true });
            rest = &rest[1..];
            continue;
        }
        if rest.starts_with(']') {
            let after = &rest[1..];
            match resolve_bracket(&mut nodes, &mut brackets, after, refs, config, extensions) {
                Some(consumed) => {
                    rest = &after[consumed..];
                }
                None => {
                    nodes.push(Node::inline(InlineKind::Text("]".to_string()), Span::empty(0)));
                    rest = after;
                }
            }
            continue;
        }
        if matches!(rest.chars().next(), Some('*') | Some('_')) {
            let ch = rest.chars().next().unwrap();
            let run = rest.chars().take_while(|&c| c == ch).count();
            let before = text[..text.len() - rest.len()].chars().next_back();
            let after = rest[run..].chars().next();
            let (can_open, can_close) = delimiter::flanking(before, after, ch);
            nodes.push(Node::inline(
                InlineKind::Delimiter { ch, run, can_open, can_close, original_length: run },
                Span::empty(0),
            ));
            rest = &rest[run * ch.len_utf8()..];
            continue;
        }
        if config.gfm_strikethrough && rest.starts_with('~') {
            let run = strikethrough::tilde_run_len(rest);
            let before = text[..text.len() - rest.len()].chars().next_back();
            let after = rest[run..].chars().next();
            let (can_open, can_close) = delimiter::flanking(before, after, '~');
            nodes.push(Node::inline(
                InlineKind::Delimiter { ch: '~', run, can_open, can_close, original_length: run },
                Span::empty(0),
            ));
            rest = &rest[run..];
            continue;
        }

        let mut matched_ext = false;
        for ext in extensions {
            if let Some(start) = ext.try_parse(rest) {
                nodes.push(start.node);
                rest = &rest[start.consumed..];
                matched_ext = true;
                break;
            }
        }
        if matched_ext {
            continue;
        }

        let len = text::text_run_len(rest);
        push_text(&mut nodes, &rest[..len]);
        rest = &rest[len..];
    }

    delimiter::resolve(&mut nodes);
    nodes
}

fn push_text(nodes: &mut Vec<Node>, s: &str) {
    if let Some(last) = nodes.last_mut() {
        if let NodeKind::Inline(InlineKind::Text(t)) = &mut last.kind {
            t.push_str(s);
            return;
        }
    }
    nodes.push(Node::inline(InlineKind::Text(s.to_string()), Span::empty(0)));
}

/// Attempts to resolve the nearest active bracket against whatever
/// follows `]` in `after`. On success, wraps the interior nodes into a
/// `Link`/`Image` node (recursively resolving its own emphasis first) and
/// removes the consumed brackets/text from `nodes`; returns whether a
/// match was made.
fn resolve_bracket(
    nodes: &mut Vec<Node>,
    brackets: &mut Vec<BracketMark>,
    after: &str,
    refs: &ReferenceTable,
    config: &Config,
    extensions: &[Box<dyn InlineParser>],
) -> Option<usize> {
    let pos = brackets.iter().rposition(|b| b.active)?;
    let mark_node_idx = brackets[pos].node_idx;
    let is_image = brackets[pos].is_image;

    let tail = link::try_match(after);
    let Some(tail) = tail else {
        brackets.remove(pos);
        return None;
    };

    let (url, title, consumed_tail) = match tail {
        link::LinkTail::Inline { url, title, consumed } => (url, title, consumed),
        link::LinkTail::Reference { label, consumed } => {
            let effective_label = if label.is_empty() {
                nodes[mark_node_idx + 1..].iter().map(|n| n.collect_text()).collect::<String>()
            } else {
                label
            };
            match refs.get(&effective_label) {
                Some(def) => (def.url.clone(), def.title.clone(), consumed),
                None => {
                    brackets.remove(pos);
                    return None;
                }
            }
        }
    };

    let mut interior: Vec<Node> = nodes.drain(mark_node_idx + 1..).collect();
    nodes.truncate(mark_node_idx);
    let interior_nodes = if is_image {
        let alt = interior.iter().map(|n| n.collect_text()).collect::<String>();
        vec![Node::inline(InlineKind::Text(alt), Span::empty(0))]
    } else {
        delimiter::resolve(&mut interior);
        interior
    };

    let kind = if is_image { InlineKind::Image { url, title } } else { InlineKind::Link { url, title } };
    let wrapped = Node::inline_with_children(kind, Span::empty(0), interior_nodes);
    nodes.push(wrapped);

    if !is_image {
        for b in brackets.iter_mut() {
            if !b.is_image {
                b.active = false;
            }
        }
    }
    brackets.truncate(pos);

    let _ = config;
    let _ = extensions;
    Some(consumed_tail)
}
