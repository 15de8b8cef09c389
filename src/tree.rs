//! The expression tree produced by [`build_expression`][crate::build_expression]
//!
//! - [`ExprNode`] - An ordered sequence of `(operator, operand)` pairs wrapped in a [`Delimiter`]
//! - [`Operand`] - Either an [`Atom`] or a nested [`ExprNode`]
//! - [`Atom`] - A name with optional sub- and superscripts, e.g. `omega_BdG^2`
//!
//! The root node always uses [`Delimiter::NONE`] and every node that came from a parenthesized
//! group uses [`Delimiter::PAREN`]. The first pair of a node uses [`Operator::NULL`] unless an
//! operator character led the group.
use crate::error::{Result, TranslationError};
use crate::operator::Operator;
use lazy_static::lazy_static;
use regex::Regex;
use std::mem;
use std::ops::Deref;
use std::str::FromStr;

lazy_static! {
    static ref ATOM_PATTERN: Regex =
        Regex::new(r"^(?P<main>[a-zA-Z0-9]+)(?:_(?P<sub>[a-zA-Z0-9_]*))?(?:\^(?P<sup>.*))?$")
            .expect("atom pattern is valid");
}

/// The smallest typeset unit
///
/// A missing script and an empty one are different atoms, although both render the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    /// The name, a non-empty run of alphanumerics
    pub main: String,
    /// The text after `_`
    pub subscript: Option<String>,
    /// The text after `^`
    pub superscript: Option<String>,
}

impl Atom {
    /// Create an atom with all of its parts
    pub fn new<M, Sub, Sup>(main: M, subscript: Option<Sub>, superscript: Option<Sup>) -> Self
    where
        M: Into<String>,
        Sub: Into<String>,
        Sup: Into<String>,
    {
        Atom {
            main: main.into(),
            subscript: subscript.map(Into::into),
            superscript: superscript.map(Into::into),
        }
    }

    /// Create an atom after checking that `main` is a valid name
    ///
    /// # Errors
    /// [`TranslationError::InvalidArgument`] when `main` is empty or not alphanumeric.
    pub fn try_new<M, Sub, Sup>(
        main: M,
        subscript: Option<Sub>,
        superscript: Option<Sup>,
    ) -> Result<Self>
    where
        M: Into<String>,
        Sub: Into<String>,
        Sup: Into<String>,
    {
        let main = main.into();
        if main.is_empty() || !main.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TranslationError::InvalidArgument(format!(
                "atom name must be a non-empty alphanumeric string, got '{main}'"
            )));
        }
        Ok(Self::new(main, subscript, superscript))
    }

    /// Create an atom without scripts
    pub fn without_scripts<M: Into<String>>(main: M) -> Self {
        Self::new::<_, String, String>(main, None, None)
    }

    /// Create an atom with only a subscript
    pub fn with_sub<M: Into<String>, Sub: Into<String>>(main: M, sub: Sub) -> Self {
        Self::new::<_, _, String>(main, Some(sub), None)
    }

    /// Create an atom with only a superscript
    pub fn with_super<M: Into<String>, Sup: Into<String>>(main: M, sup: Sup) -> Self {
        Self::new::<_, String, _>(main, None, Some(sup))
    }

    /// Create an atom with both scripts
    pub fn with_subsuper<M, Sub, Sup>(main: M, sub: Sub, sup: Sup) -> Self
    where
        M: Into<String>,
        Sub: Into<String>,
        Sup: Into<String>,
    {
        Self::new(main, Some(sub), Some(sup))
    }
}

/// Parse `main[_sub][^sup]`
///
/// The superscript takes everything after the first `^`, so it may hold markup of its own.
///
/// # Example
/// ```
/// use txt2latex::Atom;
///
/// let atom: Atom = "omega_BdG^2".parse().unwrap();
/// assert_eq!(atom, Atom::with_subsuper("omega", "BdG", "2"));
/// ```
impl FromStr for Atom {
    type Err = TranslationError;

    fn from_str(raw: &str) -> Result<Self> {
        let caps = ATOM_PATTERN
            .captures(raw)
            .ok_or_else(|| TranslationError::MalformedAtom(raw.to_owned()))?;
        Ok(Atom::new(
            &caps["main"],
            caps.name("sub").map(|m| m.as_str()),
            caps.name("sup").map(|m| m.as_str()),
        ))
    }
}

/// The pair of strings wrapped around a rendered node
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter {
    /// Emitted before the node
    pub open: &'static str,
    /// Emitted after the node
    pub close: &'static str,
}

impl Delimiter {
    /// No delimiter, used by the root
    pub const NONE: Delimiter = Delimiter {
        open: "",
        close: "",
    };

    /// Parentheses, used by every group from the input
    pub const PAREN: Delimiter = Delimiter {
        open: "(",
        close: ")",
    };

    /// Wrap already rendered text
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{inner}{}", self.open, self.close)
    }
}

/// The right hand side of an `(operator, operand)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A single atom
    Atom(Atom),
    /// A nested group
    Node(ExprNode),
}

impl From<Atom> for Operand {
    fn from(atom: Atom) -> Self {
        Operand::Atom(atom)
    }
}

impl From<ExprNode> for Operand {
    fn from(node: ExprNode) -> Self {
        Operand::Node(node)
    }
}

/// A node of the expression tree
///
/// This Derefs to the slice of its `(operator, operand)` pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExprNode {
    /// What surrounds the rendered node
    pub delimiter: Delimiter,
    children: Vec<(Operator, Operand)>,
}

impl ExprNode {
    /// Create an empty node
    pub fn new(delimiter: Delimiter) -> Self {
        ExprNode {
            delimiter,
            children: Vec::new(),
        }
    }

    /// Create a node from an iterable of pairs
    pub fn with_children<T, O>(delimiter: Delimiter, children: T) -> Self
    where
        T: IntoIterator<Item = (Operator, O)>,
        O: Into<Operand>,
    {
        ExprNode {
            delimiter,
            children: children
                .into_iter()
                .map(|(op, operand)| (op, operand.into()))
                .collect(),
        }
    }

    /// Append a pair
    pub fn push<O: Into<Operand>>(&mut self, op: Operator, operand: O) {
        self.children.push((op, operand.into()));
    }
}

// nesting depth is unbounded, so children are torn down from a work list
impl Drop for ExprNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some((_, operand)) = pending.pop() {
            if let Operand::Node(mut node) = operand {
                pending.append(&mut node.children);
            }
        }
    }
}

impl Deref for ExprNode {
    type Target = [(Operator, Operand)];

    fn deref(&self) -> &Self::Target {
        &self.children
    }
}
