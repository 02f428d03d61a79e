//! # gemchain-base
//!
//! Core library for Ruby expression lexing, parsing, and semantic chain
//! building for code completion.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! chain     → Link/Chain model, chain builder, source entry point
//!   ↓
//! syntax    → SyntaxNode tree, literal classifier, qualified names
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, ParseError
//!   ↓
//! base      → Primitives (Name, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use gemchain::{Link, chain_from_source};
//!
//! let chain = chain_from_source("user.posts.").unwrap();
//! assert_eq!(chain.links().len(), 3);
//! assert_eq!(chain.last(), &Link::Empty);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → chain)
// ============================================================================

/// Foundation types: Name, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser
pub mod parser;

/// Syntax: node tree, literal classification, constant names
pub mod syntax;

/// Chains: the dereference paths type inference consumes
pub mod chain;

// Re-export the chain API
pub use chain::{
    BuilderContext, Chain, Link, Provenance, build_chain, build_chain_with, chain_from_source,
    chain_from_source_with,
};

// Re-export foundation types
pub use base::{Name, TextRange, TextSize};
pub use parser::{ParseError, parse};
pub use syntax::{LiteralType, NodeKind, SyntaxNode};
