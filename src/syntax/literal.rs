//! Literal classification
//!
//! Maps literal nodes to the core class they evaluate to.

use std::fmt;

use super::node::{NodeKind, SyntaxNode};

/// Core class of a literal expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralType {
    Integer,
    Float,
    String,
    Symbol,
    Array,
    Hash,
    Range,
    Boolean,
    NilClass,
}

impl LiteralType {
    /// Fully-qualified class name, e.g. `::Integer`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "::Integer",
            Self::Float => "::Float",
            Self::String => "::String",
            Self::Symbol => "::Symbol",
            Self::Array => "::Array",
            Self::Hash => "::Hash",
            Self::Range => "::Range",
            Self::Boolean => "::Boolean",
            Self::NilClass => "::NilClass",
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a node as a literal, if it is one
pub fn literal_type(node: &SyntaxNode) -> Option<LiteralType> {
    let literal = match node.kind() {
        NodeKind::INTEGER => LiteralType::Integer,
        NodeKind::FLOAT => LiteralType::Float,
        NodeKind::STR | NodeKind::DSTR => LiteralType::String,
        NodeKind::SYM => LiteralType::Symbol,
        NodeKind::LIST | NodeKind::ZLIST => LiteralType::Array,
        NodeKind::HASH => LiteralType::Hash,
        NodeKind::DOT2 | NodeKind::DOT3 => LiteralType::Range,
        NodeKind::TRUE | NodeKind::FALSE => LiteralType::Boolean,
        NodeKind::NIL => LiteralType::NilClass,
        _ => return None,
    };
    Some(literal)
}
