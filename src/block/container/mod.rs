//! Container block recognizers (C4): blockquotes and lists. Each function
//! here is a pure predicate over a single line plus the column it starts
//! at; the driver (C3) owns the open-container stack and continuation
//! logic that calls into these.

pub mod blockquote;
pub mod list;
