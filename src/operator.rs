//! The fixed table of operators recognised between atoms
//!
//! Every operator is a single character with a precedence and a rule for joining the rendered
//! text on either side of it. The table is built once and never changes; the tokenizer and the
//! renderer only ever read from it.
//!
//! ```txt
//! symbol  precedence  renders as
//! (null)  0           {left}{right}
//! +       1           {left} + {right}
//! -       1           {left} - {right}
//! *       1           {left}{right}
//! /       2           \frac{left}{right}
//! ```
#[cfg(feature = "fnv")]
use fnv::FnvBuildHasher;
use lazy_static::lazy_static;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

/// How an operator joins its two rendered operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Plain concatenation, used by the null operator
    Concat,
    /// The symbol surrounded by single spaces, e.g. `a + b`
    Spaced,
    /// Juxtaposition with no symbol emitted, e.g. `ab`
    Juxtapose,
    /// A two argument `\frac{left}{right}`
    Frac,
}

/// A binary operator
///
/// The left operand of an operator is absent when it leads its sequence, e.g. the `-` in
/// `-(a+b)`. In that position it formats as a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    /// The character that denotes this operator, `None` for the null operator
    pub symbol: Option<char>,
    /// Higher binds tighter
    pub precedence: u8,
    /// How the operands are joined
    pub format: Format,
}

impl Operator {
    /// The operator that joins an operand nothing precedes
    pub const NULL: Operator = Operator {
        symbol: None,
        precedence: 0,
        format: Format::Concat,
    };

    /// Create an operator
    pub const fn new(symbol: char, precedence: u8, format: Format) -> Self {
        Operator {
            symbol: Some(symbol),
            precedence,
            format,
        }
    }

    /// Whether this is the null operator
    pub fn is_null(&self) -> bool {
        self.symbol.is_none()
    }

    /// Join two rendered operands
    ///
    /// # Example
    /// ```
    /// use txt2latex::{Format, Operator};
    ///
    /// let frac = Operator::new('/', 2, Format::Frac);
    /// assert_eq!(frac.format(Some("a"), "b"), r"\frac{a}{b}");
    /// let minus = Operator::new('-', 1, Format::Spaced);
    /// assert_eq!(minus.format(None, "b"), "-b");
    /// ```
    pub fn format(&self, left: Option<&str>, right: &str) -> String {
        match (self.format, left) {
            (Format::Concat | Format::Juxtapose, left) => {
                format!("{}{right}", left.unwrap_or_default())
            }
            (Format::Spaced, Some(left)) => format!("{left} {} {right}", self.symbol_str()),
            (Format::Spaced, None) => format!("{}{right}", self.symbol_str()),
            (Format::Frac, left) => format!("\\frac{{{}}}{{{right}}}", left.unwrap_or_default()),
        }
    }

    fn symbol_str(&self) -> String {
        self.symbol.map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "{symbol} (p{})", self.precedence),
            None => write!(f, "null (p{})", self.precedence),
        }
    }
}

macro_rules! operators {
    ($($format:ident => $($sym:literal @ $prec:literal),+;)+) => {
        [
            $(
                $(
                    Operator::new($sym, $prec, Format::$format),
                )+
            )+
        ]
    };
}

/// The base operators
///
/// Exported so callers can see which characters split atoms and how they'll render.
pub const OPERATORS: [Operator; 4] = operators!(
    Spaced => '+' @ 1, '-' @ 1;
    Juxtapose => '*' @ 1;
    Frac => '/' @ 2;
);

/// A lookup table from characters to operators
#[derive(Debug, Clone)]
pub struct OperatorTable<S = RandomState>(HashMap<char, Operator, S>);

impl<S> OperatorTable<S>
where
    S: BuildHasher + Default,
{
    /// Create from an iterator of operators and a custom hasher
    ///
    /// Operators without a symbol can't be looked up and are skipped.
    pub fn from_iter_hasher<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Operator>,
    {
        OperatorTable(
            iter.into_iter()
                .filter_map(|op| op.symbol.map(|sym| (sym, op)))
                .collect(),
        )
    }
}

impl<S: BuildHasher> OperatorTable<S> {
    /// Find the operator a character denotes
    pub fn get(&self, symbol: char) -> Option<&Operator> {
        self.0.get(&symbol)
    }

    /// All operators, ordered by precedence then symbol
    pub fn sorted(&self) -> Vec<Operator> {
        let mut ops: Vec<_> = self.0.values().copied().collect();
        ops.sort_by_key(|op| (op.precedence, op.symbol));
        ops
    }
}

/// The table type behind [`operators`], hashed with fnv when the `fnv` feature is enabled
#[cfg(feature = "fnv")]
pub type DefaultOperators = OperatorTable<FnvBuildHasher>;
/// The table type behind [`operators`], hashed with fnv when the `fnv` feature is enabled
#[cfg(not(feature = "fnv"))]
pub type DefaultOperators = OperatorTable<RandomState>;

lazy_static! {
    static ref DEFAULT_OPERATORS: DefaultOperators = OperatorTable::from_iter_hasher(OPERATORS);
}

/// The shared, read-only operator table
pub fn operators() -> &'static DefaultOperators {
    &DEFAULT_OPERATORS
}
