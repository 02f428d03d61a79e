//! Builders and assertions for chains.

use gemchain::{Chain, Link, LiteralType, chain_from_source, parse};

/// `Call(word, [], false)`
pub fn call(word: &str) -> Link {
    Link::call(word, vec![], false)
}

/// `Call(word, [], true)`
pub fn block_call(word: &str) -> Link {
    Link::call(word, vec![], true)
}

pub fn call_with(word: &str, arguments: Vec<Chain>) -> Link {
    Link::call(word, arguments, false)
}

pub fn chain(links: Vec<Link>) -> Chain {
    Chain::new(links)
}

/// One-link chain holding a literal
pub fn literal(literal: LiteralType) -> Chain {
    Chain::new(vec![Link::Literal(literal)])
}

/// Links built for `source`, panicking on a parse error
pub fn links_of(source: &str) -> Vec<Link> {
    chain_from_source(source)
        .unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
        .into_links()
}

/// S-expression of the tree parsed from `source`
pub fn tree_of(source: &str) -> String {
    parse(source)
        .unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
        .to_string()
}
