//! Translate plain-text mathematical expressions into LaTeX markup
//!
//! Expressions are written the way you'd type them in ascii, with `+ - * /`, parentheses, and
//! `_`/`^` for sub- and superscripts. The output is the equivalent LaTeX.
//!
//! ## Usage
//!
//! ```
//! let latex = txt2latex::translate("p^2 - omega_BdG^2 + 2*omega_BdG*p*zeta_BdG").unwrap();
//! assert_eq!(latex, "p^{2} - omega_{BdG}^{2} + 2omega_{BdG}pzeta_{BdG}");
//! ```
//!
//! A `txt2latex` binary is built with the default `cli` feature:
//!
//! ```sh
//! txt2latex translate "a*(b/c)"
//! txt2latex operators
//! ```
//!
//! ## Dialect
//!
//! The grammar is small and only describes structure. Nothing is evaluated or simplified.
//!
//! ```txt
//! a ::= [A-Za-z0-9]+                         atom name
//! s ::= [A-Za-z0-9_]*                        subscript
//! A ::= a | a_s | a^any | a_s^any            atom, the superscript runs to the next operator
//! o ::= + | - | * | /                        operators
//! G ::= (E)                                  group
//! T ::= A | G                                operand
//! E ::= o? T | E o T | E G                   expression
//! ```
//!
//! Whitespace is ignored everywhere, including inside atoms, so `2 x` is the atom `2x`. When
//! several operators follow each other only the last one applies. An operator in front of the
//! first operand of a group is kept and rendered as a prefix, e.g. `-(a+b)`. Operands that follow
//! each other without an operator, like `2(a+b)`, are simply concatenated.
//!
//! | operator | precedence | renders as |
//! |---|---|---|
//! | none | 0 | `ab` |
//! | `+` | 1 | `a + b` |
//! | `-` | 1 | `a - b` |
//! | `*` | 1 | `ab` |
//! | `/` | 2 | `\frac{a}{b}` |
//!
//! Higher precedence binds tighter and equal precedence folds left to right. Every group in the
//! input keeps its parentheses in the output, and empty groups disappear.
//!
//! ## Design
//!
//! Translation is a pipeline of three passes. None of them share state, so translations can run
//! on any number of threads at once.
//!
//! 1. [`parse_blocks`] matches parentheses and produces a [`Block`] tree of raw text spans.
//! 2. [`build_expression`] splits each span with a [`Tokenizer`], parses the pieces into
//!    [`Atom`]s and builds an [`ExprNode`] tree of `(operator, operand)` pairs.
//! 3. [`render`] folds each node by operator precedence into a string.
//!
//! Each pass is public so the intermediate trees can be inspected. [`parse`] runs the first two.
//!
//! ```
//! use txt2latex::{parse, render, Atom, Delimiter, ExprNode, OPERATORS};
//!
//! let expr = parse("-x_1").unwrap();
//! let minus = OPERATORS[1];
//! let expected = ExprNode::with_children(Delimiter::NONE, [(minus, Atom::with_sub("x", "1"))]);
//! assert_eq!(expr, expected);
//! assert_eq!(render(&expr), "-x_{1}");
//! ```
//!
//! ## Errors
//!
//! Any failure stops the translation and no partial output is returned. See
//! [`TranslationError`].
//!
//! ```
//! use txt2latex::{translate, TranslationError};
//!
//! assert_eq!(
//!     translate("(a+b"),
//!     Err(TranslationError::UnbalancedDelimiter { delimiter: '(', position: 0 })
//! );
//! assert_eq!(translate("a+$"), Err(TranslationError::MalformedAtom("$".into())));
//! ```
#![warn(missing_docs)]
mod block;
mod error;
mod operator;
mod parse;
mod render;
mod tokenizer;
pub mod tree;

pub use block::{parse_blocks, Block};
pub use error::{Result, TranslationError};
pub use operator::{operators, DefaultOperators, Format, Operator, OperatorTable, OPERATORS};
pub use parse::{build_expression, parse};
pub use render::render;
pub use tokenizer::{Token, Tokenizer};
pub use tree::{Atom, Delimiter, ExprNode, Operand};

use log::debug;

/// Translate a plain-text expression into LaTeX
///
/// The empty string translates to the empty string.
///
/// # Errors
/// [`TranslationError::UnbalancedDelimiter`] when parentheses don't match and
/// [`TranslationError::MalformedAtom`] when text between operators isn't an atom.
pub fn translate(inp: &str) -> Result<String> {
    debug!("translating {inp:?}");
    let blocks = parse_blocks(inp)?;
    debug!("parsed {} leaves", blocks.num_leaves());
    let expr = build_expression(&blocks)?;
    debug!("built expression with {} top level operands", expr.len());
    Ok(render(&expr))
}
