//! Qualified-name resolution for constant references

use super::node::{NodeKind, SyntaxNode};
use crate::base::Name;

/// Full `::`-separated path of a constant reference.
///
/// `COLON3` keeps its leading `::` so a top-level anchor is not lost.
/// Scopes that are not themselves constant paths (`foo::Bar`) are dynamic
/// and contribute nothing to the name.
pub fn qualified_name(node: &SyntaxNode) -> Name {
    let mut parts = Vec::new();
    let anchored = collect_parts(node, &mut parts);
    let joined = parts.join("::");
    if anchored {
        Name::from(format!("::{joined}"))
    } else {
        Name::from(joined)
    }
}

/// Push path segments outermost-first; returns true for a `::`-anchored path.
fn collect_parts<'a>(node: &'a SyntaxNode, parts: &mut Vec<&'a str>) -> bool {
    match node.kind() {
        NodeKind::CONST => {
            parts.extend(name_at(node, 0));
            false
        }
        NodeKind::COLON3 => {
            parts.extend(name_at(node, 0));
            true
        }
        NodeKind::COLON2 => {
            let anchored = match node.child_node(0) {
                Some(scope) if is_constant_path(scope) => collect_parts(scope, parts),
                _ => false,
            };
            parts.extend(name_at(node, 1));
            anchored
        }
        _ => false,
    }
}

fn name_at(node: &SyntaxNode, index: usize) -> Option<&str> {
    node.child(index).and_then(|c| c.as_name())
}

fn is_constant_path(node: &SyntaxNode) -> bool {
    matches!(
        node.kind(),
        NodeKind::CONST | NodeKind::COLON2 | NodeKind::COLON3
    )
}
