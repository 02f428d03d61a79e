//! Source text entry point

use super::builder::{BuilderContext, build_chain_with};
use super::chain::Chain;
use super::link::Link;
use crate::parser::{ParseError, parse};

/// Parse `source` and build the chain of its first expression
pub fn chain_from_source(source: &str) -> Result<Chain, ParseError> {
    chain_from_source_with(source, &BuilderContext::default())
}

/// Parse `source` and build its chain with the given options.
///
/// Input ending in `.` (optionally followed by a line ending) is an
/// in-progress member access: the dot is dropped before parsing and the
/// chain gets a trailing [`Link::Empty`] for the member that has not been
/// typed yet.
pub fn chain_from_source_with(
    source: &str,
    context: &BuilderContext,
) -> Result<Chain, ParseError> {
    let (trimmed, dangling) = match source.trim_end_matches(['\r', '\n']).strip_suffix('.') {
        Some(trimmed) => (trimmed, true),
        None => (source, false),
    };

    let root = parse(trimmed)?;
    let mut chain = build_chain_with(&root, context);
    if dangling {
        chain.push(Link::Empty);
    }

    tracing::debug!("[CHAIN] {:?} -> {}", source, chain);
    Ok(chain)
}
