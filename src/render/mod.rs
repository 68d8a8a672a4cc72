//! HTML renderer (C9): AST → HTML, per spec.md §4.9's per-node rules.

pub mod html;
pub mod options;

pub use html::{render, render_node};
pub use options::RenderOptions;
