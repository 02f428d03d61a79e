//! Parse errors
//!
//! The parser stops at the first error. Recovering from malformed input is
//! the caller's concern; chain building only ever sees well-formed trees.

use text_size::TextRange;
use thiserror::Error;

/// An error produced while lexing or parsing Ruby source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token appeared where the grammar expected something else
    #[error("expected {expected}, found {found:?} at {range:?}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        range: TextRange,
    },

    /// Input ended in the middle of a construct
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },

    /// The lexer could not recognize a character sequence
    #[error("invalid token {text:?} at {range:?}")]
    InvalidToken { text: String, range: TextRange },

    /// The left-hand side of an assignment cannot be assigned to
    #[error("cannot assign to expression at {range:?}")]
    InvalidAssignment { range: TextRange },
}

impl ParseError {
    /// Source range the error points at, if it has one
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Self::UnexpectedToken { range, .. }
            | Self::InvalidToken { range, .. }
            | Self::InvalidAssignment { range } => Some(*range),
            Self::UnexpectedEof { .. } => None,
        }
    }
}
