//! Parser for Ruby expressions
//!
//! This module turns Ruby source into the positional [`SyntaxNode`] tree
//! that chain building walks:
//! - **logos** for fast lexing
//! - a hand-written recursive descent parser for the tree
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind
//!     ↓
//! Parser → SyntaxNode tree (immutable, cheap to clone)
//!     ↓
//! ChainBuilder → Chain of Links
//! ```
//!
//! Only the subset of Ruby that appears in completion and hover queries is
//! covered: calls, blocks, variables, constants, literals, assignments, and
//! the definition and control-flow forms that wrap them.
//!
//! [`SyntaxNode`]: crate::syntax::SyntaxNode

mod error;
mod lexer;
#[allow(clippy::module_inception)]
mod parser;
mod token_kind;

pub use error::ParseError;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::parse;
pub use token_kind::TokenKind;
