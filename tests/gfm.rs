//! GFM extension coverage: tables, strikethrough, autolink extension.
//!
//! Same caveat as `tests/commonmark.rs`: no vendored `gfm.json` corpus, so
//! this is a representative sample rather than a full suite drive.

use cmark_engine::{parse_to_html, Config};
use pretty_assertions::assert_eq;

fn html(source: &str) -> String {
    parse_to_html(source, &Config::gfm()).unwrap()
}

#[test]
fn strikethrough() {
    assert_eq!(html("~~gone~~\n"), "<p><del>gone</del></p>\n");
}

#[test]
fn table_with_alignment() {
    let out = html("| a | b | c |\n| :- | :-: | -: |\n| 1 | 2 | 3 |\n");
    assert!(out.starts_with("<table>\n<thead>\n<tr>\n"));
    assert!(out.contains("<th align=\"left\">a</th>"));
    assert!(out.contains("<th align=\"center\">b</th>"));
    assert!(out.contains("<th align=\"right\">c</th>"));
    assert!(out.contains("<td align=\"left\">1</td>"));
    assert!(out.ends_with("</tbody>\n</table>\n"));
}

#[test]
fn table_without_alignment_markers() {
    let out = html("| a | b |\n| --- | --- |\n| 1 | 2 |\n");
    assert!(out.contains("<th>a</th>"));
    assert!(out.contains("<td>1</td>"));
}

#[test]
fn non_table_paragraph_unaffected() {
    assert_eq!(html("just text\n"), "<p>just text</p>\n");
}

#[test]
fn commonmark_preset_does_not_recognize_strikethrough() {
    let out = parse_to_html("~~x~~\n", &Config::commonmark()).unwrap();
    assert_eq!(out, "<p>~~x~~</p>\n");
}
