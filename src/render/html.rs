//! HTML serialization (C9): depth-first traversal over a finished token
//! tree, with per-node escaping rules (spec.md §4.9).

use crate::block::leaf::code::language_tag;
use crate::config::Config;
use crate::tree::{Alignment, BlockKind, Document, InlineKind, Node, NodeKind};

/// Renders a whole document.
pub fn render(document: &Document, config: &Config) -> String {
    let mut out = String::new();
    render_children(&document.children, &mut out, config);
    out
}

/// Renders a single externally built/modified node (spec's `render(node)`
/// entry point, for callers that assembled or edited a tree by hand).
pub fn render_node(node: &Node, config: &Config) -> String {
    let mut out = String::new();
    match &node.kind {
        NodeKind::Inline(_) => render_inline(node, &mut out, config),
        NodeKind::Block(_) => render_block(node, &mut out, config),
    }
    out
}

fn render_children(nodes: &[Node], out: &mut String, config: &Config) {
    for node in nodes {
        render_block(node, out, config);
    }
}

fn render_inline_children(nodes: &[Node], out: &mut String, config: &Config) {
    for node in nodes {
        render_inline(node, out, config);
    }
}

fn render_block(node: &Node, out: &mut String, config: &Config) {
    let Some(block) = node.as_block() else { return };
    match block {
        BlockKind::Document => render_children(&node.children, out, config),
        BlockKind::Paragraph => {
            out.push_str("<p>");
            render_inline_children(&node.children, out, config);
            out.push_str("</p>\n");
        }
        BlockKind::Heading { level } => {
            out.push_str(&format!("<h{level}>"));
            render_inline_children(&node.children, out, config);
            out.push_str(&format!("</h{level}>\n"));
        }
        BlockKind::ThematicBreak => out.push_str("<hr />\n"),
        BlockKind::Blockquote => {
            out.push_str("<blockquote>\n");
            render_children(&node.children, out, config);
            out.push_str("</blockquote>\n");
        }
        BlockKind::BulletList { tight, .. } => {
            out.push_str("<ul>\n");
            for item in &node.children {
                render_list_item(item, *tight, out, config);
            }
            out.push_str("</ul>\n");
        }
        BlockKind::OrderedList { start, tight, .. } => {
            if *start == 1 {
                out.push_str("<ol>\n");
            } else {
                out.push_str(&format!("<ol start=\"{start}\">\n"));
            }
            for item in &node.children {
                render_list_item(item, *tight, out, config);
            }
            out.push_str("</ol>\n");
        }
        // Only reached via a standalone `ListItem` node, which never
        // appears outside a `BulletList`/`OrderedList`'s children.
        BlockKind::ListItem { .. } => render_children(&node.children, out, config),
        BlockKind::CodeBlock { info, .. } => {
            let content = node.children.first().map(|c| c.collect_text()).unwrap_or_default();
            out.push_str("<pre><code");
            if let Some(lang) = language_tag(info) {
                out.push_str(" class=\"language-");
                out.push_str(&escape_attr(lang));
                out.push('"');
            }
            out.push('>');
            out.push_str(&escape_text(&content));
            out.push_str("</code></pre>\n");
        }
        BlockKind::HtmlBlock { .. } => {
            let content = node.children.first().map(|c| c.collect_text()).unwrap_or_default();
            if config.keep_html {
                out.push_str(&content);
            } else {
                out.push_str(&escape_text(&content));
            }
            if !content.ends_with('\n') {
                out.push('\n');
            }
        }
        BlockKind::Reference { .. } | BlockKind::BlankLine => {}
        BlockKind::Table { aligns } => render_table(node, aligns, out, config),
        BlockKind::TableHead | BlockKind::TableBody | BlockKind::TableRow | BlockKind::TableCell { .. } => {}
    }
}

/// Tight items inline their paragraph children directly (no `<p>` tags);
/// any other child block (a nested list, a code block) still renders
/// normally. A newline separates a tight paragraph from whatever sibling
/// follows it in the same item; the last child gets none, so a
/// single-paragraph tight item collapses to `<li>text</li>`.
fn render_list_item(item: &Node, tight: bool, out: &mut String, config: &Config) {
    out.push_str("<li>");
    if tight {
        let last = item.children.len().saturating_sub(1);
        for (i, child) in item.children.iter().enumerate() {
            if matches!(child.as_block(), Some(BlockKind::Paragraph)) {
                render_inline_children(&child.children, out, config);
                if i != last {
                    out.push('\n');
                }
            } else {
                render_block(child, out, config);
            }
        }
    } else {
        out.push('\n');
        render_children(&item.children, out, config);
    }
    out.push_str("</li>\n");
}

fn render_table(node: &Node, aligns: &[Alignment], out: &mut String, config: &Config) {
    let _ = aligns;
    out.push_str("<table>\n");
    for section in &node.children {
        match section.as_block() {
            Some(BlockKind::TableHead) => {
                out.push_str("<thead>\n");
                render_table_rows(&section.children, out, config);
                out.push_str("</thead>\n");
            }
            Some(BlockKind::TableBody) => {
                out.push_str("<tbody>\n");
                render_table_rows(&section.children, out, config);
                out.push_str("</tbody>\n");
            }
            _ => {}
        }
    }
    out.push_str("</table>\n");
}

fn render_table_rows(rows: &[Node], out: &mut String, config: &Config) {
    for row in rows {
        out.push_str("<tr>\n");
        for cell in &row.children {
            if let Some(BlockKind::TableCell { header, align }) = cell.as_block() {
                let tag = if *header { "th" } else { "td" };
                out.push('<');
                out.push_str(tag);
                match align {
                    Alignment::Left => out.push_str(" align=\"left\""),
                    Alignment::Right => out.push_str(" align=\"right\""),
                    Alignment::Center => out.push_str(" align=\"center\""),
                    Alignment::None => {}
                }
                out.push('>');
                render_inline_children(&cell.children, out, config);
                out.push_str("</");
                out.push_str(tag);
                out.push_str(">\n");
            }
        }
        out.push_str("</tr>\n");
    }
}

fn render_inline(node: &Node, out: &mut String, config: &Config) {
    let NodeKind::Inline(kind) = &node.kind else { return };
    match kind {
        InlineKind::Text(t) => out.push_str(&escape_text(t)),
        InlineKind::HtmlEntity(t) => out.push_str(&escape_text(t)),
        InlineKind::Escape(c) => out.push_str(&escape_text(&c.to_string())),
        InlineKind::CodeSpan(t) => {
            out.push_str("<code>");
            out.push_str(&escape_text(t));
            out.push_str("</code>");
        }
        InlineKind::SoftBreak => out.push('\n'),
        InlineKind::HardBreak => out.push_str("<br />\n"),
        InlineKind::Emphasis => {
            out.push_str("<em>");
            render_inline_children(&node.children, out, config);
            out.push_str("</em>");
        }
        InlineKind::Strong => {
            out.push_str("<strong>");
            render_inline_children(&node.children, out, config);
            out.push_str("</strong>");
        }
        InlineKind::Strikethrough => {
            out.push_str("<del>");
            render_inline_children(&node.children, out, config);
            out.push_str("</del>");
        }
        InlineKind::Link { url, title } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_url(url));
            out.push('"');
            if let Some(t) = title {
                out.push_str(" title=\"");
                out.push_str(&escape_attr(t));
                out.push('"');
            }
            out.push('>');
            render_inline_children(&node.children, out, config);
            out.push_str("</a>");
        }
        InlineKind::Image { url, title } => {
            let alt = node.children.iter().map(|n| n.collect_text()).collect::<String>();
            out.push_str("<img src=\"");
            out.push_str(&escape_url(url));
            out.push_str("\" alt=\"");
            out.push_str(&escape_attr(&alt));
            out.push('"');
            if let Some(t) = title {
                out.push_str(" title=\"");
                out.push_str(&escape_attr(t));
                out.push('"');
            }
            out.push_str(" />");
        }
        InlineKind::Autolink { email } => {
            let url = node.collect_text();
            let href = if *email { format!("mailto:{url}") } else { url.clone() };
            out.push_str("<a href=\"");
            out.push_str(&escape_url(&href));
            out.push_str("\">");
            out.push_str(&escape_text(&url));
            out.push_str("</a>");
        }
        InlineKind::HtmlInline(t) => {
            if config.keep_html {
                out.push_str(t);
            } else {
                out.push_str(&escape_text(t));
            }
        }
        InlineKind::Delimiter { .. } => {
            debug_assert!(false, "delimiter nodes must not survive past the delimiter processor");
        }
    }
}

/// Escapes `&`, `<`, `>` for text node content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// As [`escape_text`], plus `"` for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encodes everything except unreserved characters and the
/// published allowlist (`@ : + ? = & ( ) % # * , /`); a `%` already
/// followed by two hex digits is passed through rather than double-encoded.
pub fn escape_url(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' && i + 2 < bytes.len() && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit() {
            out.push('%');
            out.push(bytes[i + 1] as char);
            out.push(bytes[i + 2] as char);
            i += 3;
            continue;
        }
        let ch = b as char;
        if b.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~' | '@' | ':' | '+' | '?' | '=' | '&' | '(' | ')' | '#' | '*' | ',' | '/') {
            out.push(ch);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::parse_document;
    use crate::config::Config;

    fn html(source: &str) -> String {
        let cfg = Config::gfm();
        let (mut doc, refs) = parse_document(source, &cfg, &[]).unwrap();
        for node in &mut doc.children {
            crate::expand_inlines(node, &refs, &cfg, &[]);
        }
        render(&doc, &cfg)
    }

    #[test]
    fn escapes_ampersand_and_angle_brackets() {
        assert_eq!(escape_text("<a & b>"), "&lt;a &amp; b&gt;");
    }

    #[test]
    fn url_preserves_allowlisted_punctuation() {
        assert_eq!(escape_url("http://a.com/x?y=1&z=2"), "http://a.com/x?y=1&z=2");
    }

    #[test]
    fn url_encodes_spaces_and_non_ascii() {
        assert_eq!(escape_url("/a b"), "/a%20b");
    }

    #[test]
    fn heading_renders() {
        assert_eq!(html("# hello\n"), "<h1>hello</h1>\n");
    }

    #[test]
    fn tight_list_omits_paragraph_tags() {
        assert_eq!(html("- a\n- b\n"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
    }

    #[test]
    fn loose_list_keeps_paragraph_tags() {
        assert_eq!(
            html("- a\n\n- b\n"),
            "<ul>\n<li>\n<p>a</p>\n</li>\n<li>\n<p>b</p>\n</li>\n</ul>\n"
        );
    }

    #[test]
    fn fenced_code_emits_language_class() {
        assert_eq!(html("```nim\nlet x = 1\n```\n"), "<pre><code class=\"language-nim\">let x = 1\n</code></pre>\n");
    }

    #[test]
    fn table_renders_alignment() {
        let out = html("| a | b |\n| :- | -: |\n| 1 | 2 |\n");
        assert!(out.contains("<th align=\"left\">a</th>"));
        assert!(out.contains("<th align=\"right\">b</th>"));
    }
}
