//! Syntax tree for Ruby expressions
//!
//! The parser produces an immutable tree of [`SyntaxNode`]s. This module
//! also hosts the two helpers chain building consumes:
//! - [`literal_type`] - classifies literal nodes
//! - [`qualified_name`] - resolves constant paths to `Foo::Bar` names

mod literal;
mod names;
mod node;

pub use literal::{LiteralType, literal_type};
pub use names::qualified_name;
pub use node::{Child, NodeKind, SyntaxNode};
