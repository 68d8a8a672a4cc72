//! Blank lines (CommonMark §4.9): re-exported here so `block::leaf`
//! enumerates every construct; the actual predicate is a scanner
//! primitive since it's used throughout the driver, not just at block
//! boundaries.

pub use crate::scanner::is_blank;
