//! The block-structure driver (C3): an open-container stack walked one
//! line at a time, per CommonMark §2's "a line at a time" algorithm.
//! Inline content is left as a single raw-text placeholder child on each
//! leaf node; `crate::inline` expands it once reference definitions are
//! fully known.

use crate::block::container::{blockquote, list};
use crate::block::leaf::{heading, html_block, paragraph, reference_def, table, thematic_break};
use crate::block::LeafBlockParser;
use crate::config::Config;
use crate::error::{ParseError, Result};
use crate::refs::ReferenceTable;
use crate::scanner::{
    consume_indent, detect_html_block_variant, html_block_end_matches, is_blank,
    is_closing_fence, line_bounds, parse_opening_fence,
};
use crate::tree::{Alignment, BlockKind, Document, InlineKind, Node, Span};

enum Container {
    Document,
    BlockQuote,
    ListItem {
        content_column: usize,
        ordered: bool,
        marker_char: char,
        start: u64,
        loose: bool,
    },
}

struct Frame {
    container: Container,
    children: Vec<Node>,
}

enum OpenLeaf {
    Paragraph {
        text: String,
        preceded_by_blank: bool,
    },
    IndentedCode {
        lines: Vec<String>,
        preceded_by_blank: bool,
    },
    FencedCode {
        ch: char,
        len: usize,
        indent: usize,
        info: String,
        lines: Vec<String>,
        preceded_by_blank: bool,
    },
    HtmlBlock {
        variant: u8,
        lines: Vec<String>,
        preceded_by_blank: bool,
    },
}

pub fn run(
    source: &str,
    config: &Config,
    extensions: &[Box<dyn LeafBlockParser>],
) -> Result<(Document, ReferenceTable)> {
    let mut refs = ReferenceTable::new();
    let mut stack: Vec<Frame> = vec![Frame { container: Container::Document, children: Vec::new() }];
    let mut open_leaf: Option<OpenLeaf> = None;
    let mut blank_pending = false;

    let mut pos = 0usize;
    while pos < source.len() {
        let (content_end, next_pos) = line_bounds(source, pos);
        let line = &source[pos..content_end];
        process_line(
            line,
            &mut stack,
            &mut open_leaf,
            &mut refs,
            config,
            extensions,
            &mut blank_pending,
            pos,
        )?;
        pos = next_pos;
    }

    finish_leaf(&mut stack, &mut open_leaf, &mut refs, config)?;
    while stack.len() > 1 {
        close_top(&mut stack);
    }
    let root = stack.pop().expect("document frame always present");
    let mut doc = Document::new();
    doc.children = root.children;
    Ok((doc, refs))
}

#[allow(clippy::too_many_arguments)]
fn process_line(
    line: &str,
    stack: &mut Vec<Frame>,
    open_leaf: &mut Option<OpenLeaf>,
    refs: &mut ReferenceTable,
    config: &Config,
    extensions: &[Box<dyn LeafBlockParser>],
    blank_pending: &mut bool,
    offset: usize,
) -> Result<()> {
    let (matched, pos, col) = match_containers(line, stack);
    let total_containers = stack.len() - 1;
    let rest_at_matched = &line[pos..];

    let is_lazy_candidate = matched < total_containers
        && matches!(open_leaf, Some(OpenLeaf::Paragraph { .. }))
        && !is_blank(rest_at_matched);

    if is_lazy_candidate && !would_interrupt_paragraph(rest_at_matched) {
        if let Some(OpenLeaf::Paragraph { text, .. }) = open_leaf.as_mut() {
            text.push('\n');
            text.push_str(rest_at_matched.trim_start());
        }
        *blank_pending = false;
        return Ok(());
    }

    if matched < total_containers {
        finish_leaf(stack, open_leaf, refs, config)?;
        while stack.len() - 1 > matched {
            close_top(stack);
        }
    }

    let rest = &line[pos..];

    if let Some(leaf) = open_leaf.as_mut() {
        match leaf {
            OpenLeaf::IndentedCode { lines, .. } => {
                if is_blank(rest) {
                    lines.push(String::new());
                    *blank_pending = true;
                    return Ok(());
                }
                let (ib, iw) = consume_indent(rest, col, 4);
                if iw >= 4 {
                    lines.push(rest[ib..].to_string());
                    *blank_pending = false;
                    return Ok(());
                }
                finish_leaf(stack, open_leaf, refs, config)?;
            }
            OpenLeaf::FencedCode { ch, len, indent, lines, .. } => {
                if is_closing_fence(rest, *ch, *len) {
                    finish_leaf(stack, open_leaf, refs, config)?;
                    *blank_pending = false;
                    return Ok(());
                }
                let (ib, _) = consume_indent(rest, col, *indent);
                lines.push(rest[ib..].to_string());
                *blank_pending = false;
                return Ok(());
            }
            OpenLeaf::HtmlBlock { variant, lines, .. } => {
                let ends = if html_block::closes_on_blank_line(*variant) {
                    is_blank(rest)
                } else {
                    html_block_end_matches(*variant, rest)
                };
                lines.push(rest.to_string());
                *blank_pending = is_blank(rest);
                if ends {
                    finish_leaf(stack, open_leaf, refs, config)?;
                }
                return Ok(());
            }
            OpenLeaf::Paragraph { text, preceded_by_blank } => {
                if is_blank(rest) {
                    finish_leaf(stack, open_leaf, refs, config)?;
                    *blank_pending = true;
                    return Ok(());
                }
                if let Some(level) = heading::parse_setext_underline(rest) {
                    let preceded_by_blank = *preceded_by_blank;
                    let raw = std::mem::take(text);
                    *open_leaf = None;
                    let child = inline_placeholder(raw.trim().to_string());
                    push_leaf_node(stack, Node::block(BlockKind::Heading { level }, Span::empty(offset), vec![child]), preceded_by_blank);
                    *blank_pending = false;
                    return Ok(());
                }
                text.push('\n');
                text.push_str(rest);
                *blank_pending = false;
                return Ok(());
            }
        }
    }

    open_new_block(rest, col, stack, open_leaf, config, extensions, blank_pending, offset)
}

/// Walks the open container stack against `line`, returning how many
/// containers (excluding the implicit document) matched, and the byte
/// offset / effective column reached.
fn match_containers(line: &str, stack: &[Frame]) -> (usize, usize, usize) {
    let mut pos = 0usize;
    let mut col = 0usize;
    let mut matched = 0usize;

    for frame in stack.iter().skip(1) {
        match &frame.container {
            Container::BlockQuote => {
                let (ib, iw) = consume_indent(&line[pos..], col, 3);
                if let Some(marker_len) = blockquote::match_marker(&line[pos + ib..]) {
                    pos += ib + marker_len;
                    col += iw + marker_len;
                    matched += 1;
                } else {
                    break;
                }
            }
            Container::ListItem { content_column, .. } => {
                if is_blank(&line[pos..]) {
                    matched += 1;
                    break;
                }
                let (ib, iw) = consume_indent(&line[pos..], col, *content_column);
                if iw == *content_column {
                    pos += ib;
                    col += iw;
                    matched += 1;
                } else {
                    break;
                }
            }
            Container::Document => unreachable!("document is not matched per-line"),
        }
    }
    (matched, pos, col)
}

/// Whether `rest` (the unmatched tail of a line) would open a block type
/// allowed to interrupt an open paragraph (CommonMark §4.8).
fn would_interrupt_paragraph(rest: &str) -> bool {
    if thematic_break::is_thematic_break(rest) {
        return true;
    }
    if heading::parse_atx(rest).is_some() {
        return true;
    }
    if parse_opening_fence(rest).is_some() {
        return true;
    }
    let indent = rest.len() - rest.trim_start_matches(' ').len();
    if indent > 3 {
        return false;
    }
    let after = &rest[indent..];
    if blockquote::match_marker(after).is_some() {
        return true;
    }
    if let Some(variant) = detect_html_block_variant(rest) {
        if variant != 7 {
            return true;
        }
    }
    if let Some(m) = list::parse_marker(after) {
        let ordered_start_is_one = !m.ordered || m.start == 1;
        let has_content_after_marker = !after[m.consumed..].trim().is_empty() || after.len() > m.consumed;
        return paragraph::can_interrupt_with_list(has_content_after_marker, ordered_start_is_one);
    }
    false
}

#[allow(clippy::too_many_arguments)]
fn open_new_block(
    line: &str,
    mut col: usize,
    stack: &mut Vec<Frame>,
    open_leaf: &mut Option<OpenLeaf>,
    config: &Config,
    extensions: &[Box<dyn LeafBlockParser>],
    blank_pending: &mut bool,
    offset: usize,
) -> Result<()> {
    let mut pos = 0usize;

    loop {
        let (ib, iw) = consume_indent(&line[pos..], col, 3);
        let after_indent = &line[pos + ib..];
        if iw <= 3 {
            if let Some(marker_len) = blockquote::match_marker(after_indent) {
                pos += ib + marker_len;
                col += iw + marker_len;
                if stack.len() >= config.max_container_depth {
                    return Err(ParseError::DepthExceeded { offset, limit: config.max_container_depth });
                }
                stack.push(Frame { container: Container::BlockQuote, children: Vec::new() });
                continue;
            }
            if let Some(m) = list::parse_marker(after_indent) {
                pos += ib + m.consumed;
                col += iw + m.marker_width + m.content_indent;
                if stack.len() >= config.max_container_depth {
                    return Err(ParseError::DepthExceeded { offset, limit: config.max_container_depth });
                }
                let preceded_by_blank = *blank_pending;
                stack.push(Frame {
                    container: Container::ListItem {
                        content_column: col,
                        ordered: m.ordered,
                        marker_char: m.marker_char,
                        start: m.start,
                        loose: preceded_by_blank,
                    },
                    children: Vec::new(),
                });
                *blank_pending = false;
                continue;
            }
        }
        break;
    }

    let rest = &line[pos..];

    if is_blank(rest) {
        *blank_pending = true;
        return Ok(());
    }

    if thematic_break::is_thematic_break(rest) {
        push_leaf_node(stack, Node::block(BlockKind::ThematicBreak, Span::empty(offset), Vec::new()), *blank_pending);
        *blank_pending = false;
        return Ok(());
    }

    if let Some((level, text)) = heading::parse_atx(rest) {
        let child = inline_placeholder(text);
        push_leaf_node(stack, Node::block(BlockKind::Heading { level }, Span::empty(offset), vec![child]), *blank_pending);
        *blank_pending = false;
        return Ok(());
    }

    if let Some(fence) = parse_opening_fence(rest) {
        let info_start = fence.indent + fence.len;
        let info = crate::block::leaf::code::info_string(&rest[info_start..]);
        *open_leaf = Some(OpenLeaf::FencedCode {
            ch: fence.ch,
            len: fence.len,
            indent: col + fence.indent,
            info,
            lines: Vec::new(),
            preceded_by_blank: *blank_pending,
        });
        *blank_pending = false;
        return Ok(());
    }

    if let Some(variant) = detect_html_block_variant(rest) {
        let ends_immediately =
            !html_block::closes_on_blank_line(variant) && html_block_end_matches(variant, rest);
        if ends_immediately {
            let node = Node::block(
                BlockKind::HtmlBlock { variant },
                Span::empty(offset),
                vec![Node::inline(InlineKind::HtmlInline(rest.to_string()), Span::empty(offset))],
            );
            push_leaf_node(stack, node, *blank_pending);
        } else {
            *open_leaf = Some(OpenLeaf::HtmlBlock {
                variant,
                lines: vec![rest.to_string()],
                preceded_by_blank: *blank_pending,
            });
        }
        *blank_pending = false;
        return Ok(());
    }

    let (ib, iw) = consume_indent(rest, col, 4);
    if iw >= 4 {
        *open_leaf = Some(OpenLeaf::IndentedCode { lines: vec![rest[ib..].to_string()], preceded_by_blank: *blank_pending });
        *blank_pending = false;
        return Ok(());
    }

    for ext in extensions {
        if let Some(start) = ext.try_start(rest, col) {
            let child = inline_placeholder(rest[start.consumed..].to_string());
            push_leaf_node(stack, Node::block(start.kind, Span::empty(offset), vec![child]), *blank_pending);
            *blank_pending = false;
            return Ok(());
        }
    }

    *open_leaf = Some(OpenLeaf::Paragraph { text: rest.to_string(), preceded_by_blank: *blank_pending });
    *blank_pending = false;
    Ok(())
}

fn inline_placeholder(text: String) -> Node {
    Node::inline(InlineKind::Text(text), Span::empty(0))
}

/// Finalizes whatever leaf block is currently open (if any) into zero or
/// more sibling nodes pushed onto the current tip's children: reference
/// definitions are peeled off a paragraph's front, a GFM table is
/// recognized if the config allows it, and any remainder becomes a real
/// paragraph.
fn finish_leaf(
    stack: &mut Vec<Frame>,
    open_leaf: &mut Option<OpenLeaf>,
    refs: &mut ReferenceTable,
    config: &Config,
) -> Result<()> {
    let Some(leaf) = open_leaf.take() else { return Ok(()) };
    match leaf {
        OpenLeaf::Paragraph { text, preceded_by_blank } => {
            finish_paragraph(stack, text, preceded_by_blank, refs, config);
        }
        OpenLeaf::IndentedCode { mut lines, preceded_by_blank } => {
            // trailing blank lines are not part of an indented code block
            while lines.last().map(|l| l.trim().is_empty()) == Some(true) {
                lines.pop();
            }
            let content = lines.join("\n");
            let content = if content.is_empty() { content } else { format!("{content}\n") };
            let node = Node::block(
                BlockKind::CodeBlock { info: String::new(), indented: true },
                Span::empty(0),
                vec![Node::inline(InlineKind::Text(content), Span::empty(0))],
            );
            push_leaf_node(stack, node, preceded_by_blank);
        }
        OpenLeaf::FencedCode { info, lines, preceded_by_blank, .. } => {
            let content = if lines.is_empty() { String::new() } else { format!("{}\n", lines.join("\n")) };
            let node = Node::block(
                BlockKind::CodeBlock { info, indented: false },
                Span::empty(0),
                vec![Node::inline(InlineKind::Text(content), Span::empty(0))],
            );
            push_leaf_node(stack, node, preceded_by_blank);
        }
        OpenLeaf::HtmlBlock { variant, mut lines, preceded_by_blank } => {
            while lines.last().map(|l| l.is_empty()) == Some(true) {
                lines.pop();
            }
            let content = lines.join("\n");
            let node = Node::block(
                BlockKind::HtmlBlock { variant },
                Span::empty(0),
                vec![Node::inline(InlineKind::HtmlInline(content), Span::empty(0))],
            );
            push_leaf_node(stack, node, preceded_by_blank);
        }
    }
    Ok(())
}

fn finish_paragraph(stack: &mut Vec<Frame>, text: String, preceded_by_blank: bool, refs: &mut ReferenceTable, config: &Config) {
    let mut remaining = text.as_str();
    loop {
        match reference_def::try_parse(remaining) {
            Some(def) => {
                refs.insert(&def.label, def.url.clone(), def.title.clone());
                let node = Node::block(
                    BlockKind::Reference { label: def.label, url: def.url, title: def.title },
                    Span::empty(0),
                    Vec::new(),
                );
                stack.last_mut().expect("tip always present").children.push(node);
                remaining = &remaining[def.consumed..];
            }
            None => break,
        }
    }
    if remaining.trim().is_empty() {
        return;
    }

    if config.gfm_tables {
        if let Some(node) = try_build_table(remaining, config) {
            push_leaf_node(stack, node, preceded_by_blank);
            return;
        }
    }

    let node = Node::block(
        BlockKind::Paragraph,
        Span::empty(0),
        vec![inline_placeholder(remaining.to_string())],
    );
    push_leaf_node(stack, node, preceded_by_blank);
}

fn try_build_table(text: &str, _config: &Config) -> Option<Node> {
    let mut lines = text.lines();
    let header_line = lines.next()?;
    let delim_line = lines.next()?;
    let aligns = table::parse_delimiter_row(delim_line)?;
    let header_cells = table::split_row(header_line);
    if header_cells.len() != aligns.len() {
        return None;
    }

    let make_row = |cells: Vec<String>, header: bool| -> Node {
        let cell_nodes = cells
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let align = aligns.get(i).copied().unwrap_or(Alignment::None);
                Node::block(
                    BlockKind::TableCell { header, align },
                    Span::empty(0),
                    vec![inline_placeholder(text)],
                )
            })
            .collect();
        Node::block(BlockKind::TableRow, Span::empty(0), cell_nodes)
    };

    let head = Node::block(BlockKind::TableHead, Span::empty(0), vec![make_row(header_cells, true)]);
    let mut body_rows = Vec::new();
    for line in lines {
        if is_blank(line) {
            break;
        }
        body_rows.push(make_row(table::split_row(line), false));
    }
    let body = Node::block(BlockKind::TableBody, Span::empty(0), body_rows);

    Some(Node::block(BlockKind::Table { aligns }, Span::empty(0), vec![head, body]))
}

/// Pushes a finished leaf node into the current tip's children. Per
/// CommonMark §5.3, a list is loose if any of its items directly contain
/// two block-level elements with a blank line between them; when the tip
/// is an open list item that already holds an earlier block and `node`
/// was separated from it by a blank line (`preceded_by_blank`), that item
/// (and by extension its list, via `close_top`/`append_list_item`) is
/// marked loose.
fn push_leaf_node(stack: &mut [Frame], node: Node, preceded_by_blank: bool) {
    let tip = stack.last_mut().expect("tip always present");
    if preceded_by_blank && !tip.children.is_empty() {
        if let Container::ListItem { loose, .. } = &mut tip.container {
            *loose = true;
        }
    }
    tip.children.push(node);
}

fn close_top(stack: &mut Vec<Frame>) {
    let frame = stack.pop().expect("caller checked len > 1");
    match frame.container {
        Container::Document => unreachable!("document only closed by caller after loop"),
        Container::BlockQuote => {
            let node = Node::block(BlockKind::Blockquote, Span::empty(0), frame.children);
            stack.last_mut().expect("blockquote always has a parent").children.push(node);
        }
        Container::ListItem { content_column, ordered, marker_char, start, loose } => {
            let node = Node::block(BlockKind::ListItem { indent: content_column }, Span::empty(0), frame.children);
            append_list_item(stack.last_mut().expect("list item always has a parent"), node, ordered, marker_char, start, loose);
        }
    }
}

fn append_list_item(parent: &mut Frame, item: Node, ordered: bool, marker_char: char, start: u64, loose: bool) {
    let can_merge = parent.children.last().map_or(false, |last| match &last.kind {
        crate::tree::NodeKind::Block(BlockKind::BulletList { marker, .. }) => !ordered && *marker == marker_char,
        crate::tree::NodeKind::Block(BlockKind::OrderedList { marker, .. }) => ordered && *marker == marker_char,
        _ => false,
    });

    if can_merge {
        let last = parent.children.last_mut().expect("checked above");
        if let crate::tree::NodeKind::Block(BlockKind::BulletList { tight, .. } | BlockKind::OrderedList { tight, .. }) = &mut last.kind {
            if loose {
                *tight = false;
            }
        }
        last.children.push(item);
        return;
    }

    let list_node = if ordered {
        Node::block(BlockKind::OrderedList { start, marker: marker_char, tight: !loose }, Span::empty(0), vec![item])
    } else {
        Node::block(BlockKind::BulletList { marker: marker_char, tight: !loose }, Span::empty(0), vec![item])
    };
    parent.children.push(list_node);
}
