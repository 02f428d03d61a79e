//! Semantic chains
//!
//! A [`Chain`] is the left-to-right dereference path of one expression:
//! `foo.bar(1).baz` becomes `[Call(foo), Call(bar, [<::Integer>]), Call(baz)]`.
//! Type inference resolves a chain link by link, starting from its head.
//!
//! ## Entry points
//!
//! - [`build_chain`] / [`build_chain_with`] - from a parsed [`SyntaxNode`]
//! - [`chain_from_source`] / [`chain_from_source_with`] - from source text,
//!   with a trailing `.` treated as an in-progress member access
//!
//! Building is a pure function of the node and a [`BuilderContext`]; it can
//! run on any number of threads at once.
//!
//! [`SyntaxNode`]: crate::syntax::SyntaxNode

mod builder;
#[allow(clippy::module_inception)]
mod chain;
mod link;
mod source;

pub use builder::{BuilderContext, build_chain, build_chain_with};
pub use chain::{Chain, Provenance};
pub use link::Link;
pub use source::{chain_from_source, chain_from_source_with};
