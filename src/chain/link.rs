//! Links: the atoms of a chain

use std::fmt;

use super::chain::{Chain, Provenance};
use crate::base::Name;
use crate::syntax::LiteralType;

/// One step of a dereference path
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Link {
    /// `self` or `super`
    Head {
        word: Name,
        /// Node the head came from, so `super(...)` arguments stay recoverable
        #[cfg_attr(feature = "serde", serde(skip))]
        origin: Provenance,
    },
    /// Method call, or a bare identifier the inference engine must resolve
    Call {
        word: Name,
        arguments: Vec<Chain>,
        with_block: bool,
    },
    Constant(Name),
    InstanceVariable(Name),
    ClassVariable(Name),
    GlobalVariable(Name),
    /// Reference to a passed block, `&blk`
    BlockVariable(Name),
    Literal(LiteralType),
    /// Both operands of `a || b`
    Or { left: Chain, right: Chain },
    /// Value of a construct that has none, e.g. a `def`
    UndefinedCall,
    /// Unrecognized or not-yet-typed content
    Empty,
}

impl Link {
    pub fn call(word: impl Into<Name>, arguments: Vec<Chain>, with_block: bool) -> Self {
        Self::Call {
            word: word.into(),
            arguments,
            with_block,
        }
    }

    pub fn head(word: impl Into<Name>) -> Self {
        Self::Head {
            word: word.into(),
            origin: Provenance::default(),
        }
    }

    /// The name this link looks up
    pub fn word(&self) -> Name {
        match self {
            Self::Head { word, .. } | Self::Call { word, .. } => word.clone(),
            Self::Constant(name)
            | Self::InstanceVariable(name)
            | Self::ClassVariable(name)
            | Self::GlobalVariable(name)
            | Self::BlockVariable(name) => name.clone(),
            Self::Literal(literal) => Name::from(format!("<{literal}>")),
            Self::Or { .. } => Name::new_static("<or>"),
            Self::UndefinedCall | Self::Empty => Name::new_static("<undefined>"),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefinedCall | Self::Empty)
    }

    pub fn arguments(&self) -> &[Chain] {
        match self {
            Self::Call { arguments, .. } => arguments,
            _ => &[],
        }
    }

    pub fn with_block(&self) -> bool {
        matches!(self, Self::Call { with_block: true, .. })
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call {
                word,
                arguments,
                with_block,
            } => {
                f.write_str(word)?;
                if !arguments.is_empty() {
                    f.write_str("(")?;
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(")")?;
                }
                if *with_block {
                    f.write_str(" { }")?;
                }
                Ok(())
            }
            Self::Or { left, right } => write!(f, "({left} || {right})"),
            Self::Empty => Ok(()),
            other => f.write_str(&other.word()),
        }
    }
}
