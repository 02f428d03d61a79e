//! Syntax tree nodes
//!
//! Every node is a kind tag plus an ordered list of children. Children are
//! addressed positionally, so each kind has a fixed layout:
//!
//! ```text
//! SCOPE      [table, args, body]
//! ITER       [call, SCOPE]
//! CALL       [receiver, method, args]        (also OPCALL, QCALL)
//! FCALL      [method, args]
//! VCALL      [method]
//! ATTRASGN   [receiver, method=, LIST]
//! LIST       [element.., nil]                (trailing nil is the closing sentinel)
//! BLOCK_PASS [LIST | nil, value]
//! OP_ASGN_OR [read, nil, assignment]
//! COLON2     [scope, name]
//! LASGN      [name, value]                   (also DASGN, IASGN, CVASGN, GASGN, CDECL)
//! ```

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::Name;

/// All node kinds produced by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum NodeKind {
    // =========================================================================
    // SCOPES AND SEQUENCES
    // =========================================================================
    SCOPE,
    BLOCK,
    BEGIN,
    RESCUE,
    RESBODY,
    ENSURE,

    // =========================================================================
    // CALLS
    // =========================================================================
    ITER,
    CALL,
    OPCALL,
    QCALL,
    FCALL,
    VCALL,
    ATTRASGN,
    SUPER,
    ZSUPER,
    BLOCK_PASS,
    SPLAT,

    // =========================================================================
    // REFERENCES
    // =========================================================================
    SELF,
    CONST,
    COLON2,
    COLON3,
    LVAR,
    DVAR,
    IVAR,
    CVAR,
    GVAR,

    // =========================================================================
    // ASSIGNMENTS
    // =========================================================================
    LASGN,
    DASGN,
    IASGN,
    CVASGN,
    GASGN,
    CDECL,
    OP_ASGN_OR,
    OP_ASGN_AND,
    OP_ASGN1,
    OP_ASGN2,

    // =========================================================================
    // CONTROL FLOW
    // =========================================================================
    AND,
    OR,
    IF,
    UNLESS,

    // =========================================================================
    // DEFINITIONS
    // =========================================================================
    CLASS,
    MODULE,
    SCLASS,
    DEFN,
    DEFS,

    // =========================================================================
    // LITERALS
    // =========================================================================
    INTEGER,
    FLOAT,
    STR,
    DSTR,
    SYM,
    NIL,
    TRUE,
    FALSE,
    LIST,
    ZLIST,
    HASH,
    DOT2,
    DOT3,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SCOPE => "SCOPE",
            Self::BLOCK => "BLOCK",
            Self::BEGIN => "BEGIN",
            Self::RESCUE => "RESCUE",
            Self::RESBODY => "RESBODY",
            Self::ENSURE => "ENSURE",
            Self::ITER => "ITER",
            Self::CALL => "CALL",
            Self::OPCALL => "OPCALL",
            Self::QCALL => "QCALL",
            Self::FCALL => "FCALL",
            Self::VCALL => "VCALL",
            Self::ATTRASGN => "ATTRASGN",
            Self::SUPER => "SUPER",
            Self::ZSUPER => "ZSUPER",
            Self::BLOCK_PASS => "BLOCK_PASS",
            Self::SPLAT => "SPLAT",
            Self::SELF => "SELF",
            Self::CONST => "CONST",
            Self::COLON2 => "COLON2",
            Self::COLON3 => "COLON3",
            Self::LVAR => "LVAR",
            Self::DVAR => "DVAR",
            Self::IVAR => "IVAR",
            Self::CVAR => "CVAR",
            Self::GVAR => "GVAR",
            Self::LASGN => "LASGN",
            Self::DASGN => "DASGN",
            Self::IASGN => "IASGN",
            Self::CVASGN => "CVASGN",
            Self::GASGN => "GASGN",
            Self::CDECL => "CDECL",
            Self::OP_ASGN_OR => "OP_ASGN_OR",
            Self::OP_ASGN_AND => "OP_ASGN_AND",
            Self::OP_ASGN1 => "OP_ASGN1",
            Self::OP_ASGN2 => "OP_ASGN2",
            Self::AND => "AND",
            Self::OR => "OR",
            Self::IF => "IF",
            Self::UNLESS => "UNLESS",
            Self::CLASS => "CLASS",
            Self::MODULE => "MODULE",
            Self::SCLASS => "SCLASS",
            Self::DEFN => "DEFN",
            Self::DEFS => "DEFS",
            Self::INTEGER => "INTEGER",
            Self::FLOAT => "FLOAT",
            Self::STR => "STR",
            Self::DSTR => "DSTR",
            Self::SYM => "SYM",
            Self::NIL => "NIL",
            Self::TRUE => "TRUE",
            Self::FALSE => "FALSE",
            Self::LIST => "LIST",
            Self::ZLIST => "ZLIST",
            Self::HASH => "HASH",
            Self::DOT2 => "DOT2",
            Self::DOT3 => "DOT3",
        }
    }

    /// Argument lists and array literals
    pub fn is_list(self) -> bool {
        matches!(self, Self::LIST | Self::ZLIST)
    }

    /// Nodes a block can be attached to
    pub fn is_call(self) -> bool {
        matches!(
            self,
            Self::CALL | Self::QCALL | Self::FCALL | Self::VCALL | Self::SUPER | Self::ZSUPER
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One positional child of a node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Child {
    Node(SyntaxNode),
    /// Identifier, method id, or variable name (sigils included)
    Name(Name),
    /// Literal value as written, minus quotes and sigils
    Literal(SmolStr),
    /// Local variable table of a scope, in declaration order
    Table(Vec<Name>),
    Absent,
}

impl Child {
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Text of a name or literal child
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Name(text) | Self::Literal(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<SyntaxNode> for Child {
    fn from(node: SyntaxNode) -> Self {
        Self::Node(node)
    }
}

impl From<Option<SyntaxNode>> for Child {
    fn from(node: Option<SyntaxNode>) -> Self {
        node.map_or(Self::Absent, Self::Node)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Name(name) => write!(f, ":{name}"),
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::Table(names) => {
                f.write_str("[")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(name)?;
                }
                f.write_str("]")
            }
            Self::Absent => f.write_str("nil"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct NodeData {
    kind: NodeKind,
    children: Vec<Child>,
    range: TextRange,
}

/// An immutable syntax tree node
///
/// Cloning is a reference-count increment, so chains can keep the node they
/// were built from without copying the tree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SyntaxNode(Arc<NodeData>);

impl SyntaxNode {
    pub fn new(kind: NodeKind, children: Vec<Child>, range: TextRange) -> Self {
        Self(Arc::new(NodeData {
            kind,
            children,
            range,
        }))
    }

    pub fn kind(&self) -> NodeKind {
        self.0.kind
    }

    pub fn children(&self) -> &[Child] {
        &self.0.children
    }

    pub fn child(&self, index: usize) -> Option<&Child> {
        self.0.children.get(index)
    }

    /// Child at `index`, if it is a node
    pub fn child_node(&self, index: usize) -> Option<&SyntaxNode> {
        self.child(index).and_then(Child::as_node)
    }

    pub fn last_child(&self) -> Option<&Child> {
        self.0.children.last()
    }

    pub fn range(&self) -> TextRange {
        self.0.range
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind())?;
        for child in self.children() {
            write!(f, " {child}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?} {}", self.kind(), self.range(), self)
    }
}
