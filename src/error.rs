//! Error taxonomy for the parsing/rendering pipeline.
//!
//! `Markdown has no parse errors` in the CommonMark sense: any input produces
//! *some* HTML. The variants here cover the cases spec.md §7 calls out —
//! malformed input, exceeded nesting limits, and internal invariant
//! violations raised by a caller-supplied parser. All carry the byte offset
//! where the condition was detected so a caller can build a diagnostic.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was not valid UTF-8, or exceeded a configured size limit.
    #[error("malformed input at byte {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },

    /// Container nesting, emphasis nesting, or reference resolution exceeded
    /// the configured depth limit.
    #[error("depth limit exceeded at byte {offset} (limit {limit})")]
    DepthExceeded { offset: usize, limit: usize },

    /// A parser (built-in or caller-supplied) violated a driver invariant:
    /// returned success without advancing the cursor, or left the delimiter
    /// stack in an inconsistent state.
    #[error("internal invariant violated at byte {offset} in `{parser}`: {reason}")]
    InternalInvariant {
        offset: usize,
        parser: String,
        reason: String,
    },
}

impl ParseError {
    pub fn offset(&self) -> usize {
        match self {
            ParseError::MalformedInput { offset, .. } => *offset,
            ParseError::DepthExceeded { offset, .. } => *offset,
            ParseError::InternalInvariant { offset, .. } => *offset,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
