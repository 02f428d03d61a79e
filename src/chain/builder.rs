//! Chain builder
//!
//! Classifies a syntax tree into a [`Chain`]. The walk is a single exhaustive
//! match over [`NodeKind`]; shapes without an arm fall back to literal
//! classification, then to [`Link::Empty`]. Building never fails.

use std::sync::Arc;

use super::chain::{Chain, Provenance};
use super::link::Link;
use crate::base::Name;
use crate::syntax::{Child, NodeKind, SyntaxNode, literal_type, qualified_name};

/// Per-call options for chain building
#[derive(Debug, Clone, Default)]
pub struct BuilderContext {
    filename: Option<Arc<str>>,
    in_block: bool,
}

impl BuilderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the source file in every chain's provenance
    pub fn with_filename(mut self, filename: impl Into<Arc<str>>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Treat the root expression as the target of a block
    pub fn with_in_block(mut self, in_block: bool) -> Self {
        self.in_block = in_block;
        self
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn in_block(&self) -> bool {
        self.in_block
    }
}

/// Build the chain for `node` with default options
pub fn build_chain(node: &SyntaxNode) -> Chain {
    build_chain_with(node, &BuilderContext::default())
}

/// Build the chain for `node`
pub fn build_chain_with(node: &SyntaxNode, context: &BuilderContext) -> Chain {
    ChainBuilder {
        filename: context.filename.clone(),
    }
    .chain(node, context.in_block)
}

struct ChainBuilder {
    filename: Option<Arc<str>>,
}

impl ChainBuilder {
    fn chain(&self, node: &SyntaxNode, in_block: bool) -> Chain {
        let mut links = Vec::new();
        self.generate(node, in_block, &mut links);
        Chain::with_provenance(links, self.provenance(node))
    }

    fn provenance(&self, node: &SyntaxNode) -> Provenance {
        Provenance::new(Some(node.clone()), self.filename.clone())
    }

    fn generate_child(
        &self,
        node: &SyntaxNode,
        index: usize,
        in_block: bool,
        links: &mut Vec<Link>,
    ) {
        match node.child_node(index) {
            Some(child) => self.generate(child, in_block, links),
            None => links.push(Link::Empty),
        }
    }

    /// Append the links for `node`. `in_block` is true only for the call a
    /// block is attached to.
    fn generate(&self, node: &SyntaxNode, in_block: bool, links: &mut Vec<Link>) {
        match node.kind() {
            NodeKind::SCOPE => self.generate_child(node, 2, in_block, links),
            NodeKind::ITER => self.generate_child(node, 0, true, links),
            NodeKind::CALL | NodeKind::OPCALL | NodeKind::QCALL => {
                let children = node.children();
                let receivers = children.len().saturating_sub(2);
                for receiver in children[..receivers].iter().filter_map(Child::as_node) {
                    self.generate(receiver, false, links);
                }
                let arguments = match node.last_child() {
                    Some(Child::Node(last)) if last.kind().is_list() => self.argument_chains(last),
                    Some(Child::Node(last)) if last.kind() == NodeKind::BLOCK_PASS => {
                        vec![self.chain(last, false)]
                    }
                    _ => Vec::new(),
                };
                links.push(Link::call(
                    method_name(node, receivers),
                    arguments,
                    in_block || block_passed(node),
                ));
            }
            NodeKind::ATTRASGN => {
                self.generate_child(node, 0, false, links);
                let arguments = node
                    .child_node(2)
                    .map(|values| self.argument_chains(values))
                    .unwrap_or_default();
                links.push(Link::call(
                    method_name(node, 1),
                    arguments,
                    in_block || block_passed(node),
                ));
            }
            NodeKind::VCALL => {
                links.push(Link::call(method_name(node, 0), Vec::new(), in_block));
            }
            NodeKind::FCALL => match node.child_node(1) {
                Some(list) if list.kind().is_list() => links.push(Link::call(
                    method_name(node, 0),
                    self.argument_chains(list),
                    in_block,
                )),
                // `foo(&blk)`: the passed block stands in for the call
                Some(pass) if pass.kind() == NodeKind::BLOCK_PASS => {
                    links.push(Link::BlockVariable(block_pass_name(pass)));
                }
                _ => links.push(Link::call(method_name(node, 0), Vec::new(), in_block)),
            },
            NodeKind::SELF => links.push(Link::head("self")),
            NodeKind::SUPER | NodeKind::ZSUPER => links.push(Link::Head {
                word: Name::new_static("super"),
                origin: self.provenance(node),
            }),
            NodeKind::CONST | NodeKind::COLON2 | NodeKind::COLON3 => {
                links.push(Link::Constant(qualified_name(node)));
            }
            NodeKind::LVAR | NodeKind::LASGN | NodeKind::DVAR | NodeKind::DASGN => {
                links.push(Link::call(method_name(node, 0), Vec::new(), false));
            }
            NodeKind::IVAR | NodeKind::IASGN => {
                links.push(Link::InstanceVariable(method_name(node, 0)));
            }
            NodeKind::CVAR | NodeKind::CVASGN => {
                links.push(Link::ClassVariable(method_name(node, 0)));
            }
            NodeKind::GVAR | NodeKind::GASGN => {
                links.push(Link::GlobalVariable(method_name(node, 0)));
            }
            // Only the assigned value is chained, never the guard
            NodeKind::OP_ASGN_OR => {
                match node.child_node(2).and_then(|assignment| assignment.child_node(1)) {
                    Some(value) => self.generate(value, in_block, links),
                    None => links.push(Link::Empty),
                }
            }
            NodeKind::CLASS
            | NodeKind::MODULE
            | NodeKind::SCLASS
            | NodeKind::DEFN
            | NodeKind::DEFS => links.push(Link::UndefinedCall),
            NodeKind::AND => match node.last_child().and_then(Child::as_node) {
                Some(right) => self.generate(right, in_block, links),
                None => links.push(Link::Empty),
            },
            NodeKind::OR => links.push(Link::Or {
                left: self.operand_chain(node, 0),
                right: self.operand_chain(node, 1),
            }),
            NodeKind::BLOCK | NodeKind::BEGIN => self.generate_child(node, 0, in_block, links),
            NodeKind::BLOCK_PASS => links.push(Link::BlockVariable(block_pass_name(node))),
            NodeKind::RESCUE
            | NodeKind::RESBODY
            | NodeKind::ENSURE
            | NodeKind::SPLAT
            | NodeKind::CDECL
            | NodeKind::OP_ASGN_AND
            | NodeKind::OP_ASGN1
            | NodeKind::OP_ASGN2
            | NodeKind::IF
            | NodeKind::UNLESS
            | NodeKind::INTEGER
            | NodeKind::FLOAT
            | NodeKind::STR
            | NodeKind::DSTR
            | NodeKind::SYM
            | NodeKind::NIL
            | NodeKind::TRUE
            | NodeKind::FALSE
            | NodeKind::LIST
            | NodeKind::ZLIST
            | NodeKind::HASH
            | NodeKind::DOT2
            | NodeKind::DOT3 => links.push(self.fallback(node)),
        }
    }

    fn fallback(&self, node: &SyntaxNode) -> Link {
        match literal_type(node) {
            Some(literal) => Link::Literal(literal),
            None => {
                tracing::trace!("[CHAIN] no link for {}", node.kind());
                Link::Empty
            }
        }
    }

    /// Operand of `a || b`, built as its own chain
    fn operand_chain(&self, node: &SyntaxNode, index: usize) -> Chain {
        match node.child_node(index) {
            Some(operand) => self.chain(operand, false),
            None => Chain::with_provenance(Vec::new(), self.provenance(node)),
        }
    }

    /// One chain per element of an argument list, minus its closing sentinel.
    /// Arguments never inherit the block flag of their call.
    fn argument_chains(&self, list: &SyntaxNode) -> Vec<Chain> {
        list.children()
            .iter()
            .filter_map(Child::as_node)
            .map(|argument| self.chain(argument, false))
            .collect()
    }
}

/// The node's last child is a `BLOCK_PASS`
fn block_passed(node: &SyntaxNode) -> bool {
    matches!(
        node.last_child(),
        Some(Child::Node(last)) if last.kind() == NodeKind::BLOCK_PASS
    )
}

/// `&` plus the name of the passed value, e.g. `&blk`
fn block_pass_name(pass: &SyntaxNode) -> Name {
    let name = pass
        .child_node(1)
        .and_then(|value| value.child(0))
        .and_then(Child::text)
        .unwrap_or_default();
    Name::from(format!("&{name}"))
}

fn method_name(node: &SyntaxNode, index: usize) -> Name {
    node.child(index)
        .and_then(Child::text)
        .map(Name::from)
        .unwrap_or_default()
}
