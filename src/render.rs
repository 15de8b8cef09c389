//! Collapse an expression tree into markup
//!
//! A node is rendered by folding its `(operator, operand)` pairs by precedence. The tighter an
//! operator binds the earlier it's applied, and operators of equal precedence are applied left
//! to right. The operator of the first pair has no left operand and formats as a prefix.
//!
//! Folding uses an operator stack in a single pass rather than repeated scans for the highest
//! precedence, which gives the same result.
use crate::operator::Operator;
use crate::tree::{Atom, Delimiter, ExprNode, Operand};
use std::{fmt, mem, slice};

/// Render a node, including its delimiter
///
/// An empty node renders as the empty string without its delimiter.
///
/// # Example
/// ```
/// use txt2latex::{parse, render};
///
/// let expr = parse("a*(b/c)").unwrap();
/// assert_eq!(render(&expr), r"a(\frac{b}{c})");
/// ```
pub fn render(node: &ExprNode) -> String {
    let mut current = Fold::new(node);
    let mut parents = Vec::new();
    loop {
        match current.pairs.next() {
            Some((op, operand)) => {
                current.push_operator(*op);
                match operand {
                    Operand::Atom(atom) => current.push_operand(atom.to_string()),
                    Operand::Node(inner) => {
                        // resumed once the nested node is finished
                        parents.push(mem::replace(&mut current, Fold::new(inner)));
                    }
                }
            }
            None => {
                let text = current.finish();
                match parents.pop() {
                    Some(parent) => {
                        current = parent;
                        current.push_operand(text);
                    }
                    None => return text,
                }
            }
        }
    }
}

/// The folding state of one node
struct Fold<'n> {
    pairs: slice::Iter<'n, (Operator, Operand)>,
    delimiter: Delimiter,
    empty: bool,
    ops: Vec<Operator>,
    // the leading operand slot is absent, every reduction fills one
    operands: Vec<Option<String>>,
}

impl<'n> Fold<'n> {
    fn new(node: &'n ExprNode) -> Self {
        Fold {
            pairs: node.iter(),
            delimiter: node.delimiter,
            empty: node.is_empty(),
            ops: Vec::with_capacity(node.len()),
            operands: vec![None],
        }
    }

    fn push_operator(&mut self, op: Operator) {
        while self.ops.last().map_or(false, |top| top.precedence >= op.precedence) {
            self.reduce();
        }
        self.ops.push(op);
    }

    fn push_operand(&mut self, text: String) {
        self.operands.push(Some(text));
    }

    fn reduce(&mut self) {
        if let (Some(op), Some(right), Some(left)) =
            (self.ops.pop(), self.operands.pop(), self.operands.pop())
        {
            let right = right.unwrap_or_default();
            self.operands.push(Some(op.format(left.as_deref(), &right)));
        }
    }

    fn finish(mut self) -> String {
        if self.empty {
            return String::new();
        }
        while !self.ops.is_empty() {
            self.reduce();
        }
        let inner = self.operands.pop().flatten().unwrap_or_default();
        self.delimiter.wrap(&inner)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.main)?;
        if let Some(sub) = self.subscript.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "_{{{sub}}}")?;
        }
        if let Some(sup) = self.superscript.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "^{{{sup}}}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
