//! Chain: an ordered dereference path

use std::fmt;
use std::sync::Arc;

use super::link::Link;
use crate::syntax::SyntaxNode;

/// Where a chain or link came from.
///
/// Provenance is diagnostic data only: it never takes part in equality, so
/// two chains built from different files or trees compare by links alone.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    pub node: Option<SyntaxNode>,
    pub filename: Option<Arc<str>>,
}

impl Provenance {
    pub fn new(node: Option<SyntaxNode>, filename: Option<Arc<str>>) -> Self {
        Self { node, filename }
    }

    pub fn from_filename(filename: impl Into<Arc<str>>) -> Self {
        Self {
            node: None,
            filename: Some(filename.into()),
        }
    }
}

impl PartialEq for Provenance {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Provenance {}

/// Left-to-right sequence of links for one expression.
///
/// Never empty: an empty link list becomes a single [`Link::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chain {
    links: Vec<Link>,
    #[cfg_attr(feature = "serde", serde(skip))]
    provenance: Provenance,
}

impl Chain {
    pub fn new(links: Vec<Link>) -> Self {
        Self::with_provenance(links, Provenance::default())
    }

    pub fn with_provenance(mut links: Vec<Link>, provenance: Provenance) -> Self {
        if links.is_empty() {
            links.push(Link::Empty);
        }
        Self { links, provenance }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the chain has no links (never true)
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn first(&self) -> &Link {
        &self.links[0]
    }

    pub fn last(&self) -> &Link {
        &self.links[self.links.len() - 1]
    }

    /// Every link but the last: the receiver of the final lookup
    pub fn base(&self) -> &[Link] {
        &self.links[..self.links.len() - 1]
    }

    /// The expression names a constant, e.g. `Foo::Bar`
    pub fn is_constant(&self) -> bool {
        matches!(self.last(), Link::Constant(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.first(), Link::Literal(_))
    }

    /// Some link has no resolvable value
    pub fn is_undefined(&self) -> bool {
        self.links.iter().any(Link::is_undefined)
    }

    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn node(&self) -> Option<&SyntaxNode> {
        self.provenance.node.as_ref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.provenance.filename.as_deref()
    }

    pub(crate) fn push(&mut self, link: Link) {
        self.links.push(link);
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{link}")?;
        }
        Ok(())
    }
}
