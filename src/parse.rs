use crate::block::{parse_blocks, Block};
use crate::error::Result;
use crate::operator::Operator;
use crate::tokenizer::{Token, Tokenizer};
use crate::tree::{Atom, Delimiter, ExprNode};
use log::{trace, warn};
use std::{mem, slice};

/// A group whose children are still being read
struct Frame<'b, 'a> {
    children: slice::Iter<'b, Block<'a>>,
    node: ExprNode,
    /// The operator waiting for an operand, `None` is different from a pending [`Operator::NULL`]
    pending: Option<Operator>,
}

impl<'b, 'a> Frame<'b, 'a> {
    fn new(children: &'b [Block<'a>], delimiter: Delimiter) -> Self {
        Frame {
            children: children.iter(),
            node: ExprNode::new(delimiter),
            pending: None,
        }
    }

    fn read_leaf(&mut self, text: &str) -> Result<()> {
        for token in Tokenizer::new(text) {
            match token {
                // only the last operator before an operand counts
                Token::Operator(op) => self.pending = Some(op),
                Token::Atom(raw) => {
                    let atom: Atom = raw.parse()?;
                    self.node.push(self.pending.take().unwrap_or(Operator::NULL), atom);
                }
            }
        }
        Ok(())
    }

    fn attach(&mut self, sub: ExprNode, dangling: Option<Operator>) {
        if sub.is_empty() {
            trace!("skipping empty group");
        } else {
            self.node.push(self.pending.take().unwrap_or(Operator::NULL), sub);
        }
        if dangling.is_some() {
            self.pending = dangling;
        }
    }
}

/// Build a node from the children of a group
///
/// Returns the node with the operator still waiting for an operand when the children ran out.
/// Nested groups are kept on an explicit stack so depth is bounded by memory only.
fn next_node(
    children: &[Block<'_>],
    delimiter: Delimiter,
) -> Result<(ExprNode, Option<Operator>)> {
    let mut current = Frame::new(children, delimiter);
    let mut parents = Vec::new();
    loop {
        match current.children.next() {
            Some(Block::Leaf(text)) => current.read_leaf(text)?,
            Some(Block::Group(inner)) => {
                let inner = Frame::new(inner, Delimiter::PAREN);
                parents.push(mem::replace(&mut current, inner));
            }
            None => match parents.pop() {
                Some(mut parent) => {
                    parent.attach(current.node, current.pending);
                    current = parent;
                }
                None => return Ok((current.node, current.pending)),
            },
        }
    }
}

/// Build the expression tree of a block tree
///
/// The block is treated as the root, so the result always has [`Delimiter::NONE`]; a bare leaf
/// is handled as a root with that single child.
///
/// # Errors
/// [`TranslationError::MalformedAtom`][crate::TranslationError::MalformedAtom] when some text
/// between operators isn't an atom.
pub fn build_expression(block: &Block<'_>) -> Result<ExprNode> {
    let children = match block {
        Block::Group(children) => children.as_slice(),
        leaf => std::slice::from_ref(leaf),
    };
    let (root, dangling) = next_node(children, Delimiter::NONE)?;
    if let Some(op) = dangling {
        warn!("dropping trailing operator {op}");
    }
    Ok(root)
}

/// Parse a string into its expression tree
///
/// # Example
/// ```
/// use txt2latex::{parse, Atom, Delimiter, ExprNode, Operator};
///
/// let expr = parse("x_1").unwrap();
/// let expected = ExprNode::with_children(Delimiter::NONE, [(Operator::NULL, Atom::with_sub("x", "1"))]);
/// assert_eq!(expr, expected);
/// ```
pub fn parse(inp: &str) -> Result<ExprNode> {
    build_expression(&parse_blocks(inp)?)
}

#[cfg(test)]
mod tests {
    use crate::block::Block;
    use crate::error::TranslationError;
    use crate::operator::{operators, Operator};
    use crate::tree::{Atom, Delimiter, ExprNode, Operand};
    use pretty_assertions::assert_eq;

    fn op(symbol: char) -> Operator {
        *operators().get(symbol).unwrap()
    }

    fn root<const N: usize>(children: [(Operator, Operand); N]) -> ExprNode {
        ExprNode::with_children(Delimiter::NONE, children)
    }

    fn group<const N: usize>(children: [(Operator, Operand); N]) -> Operand {
        ExprNode::with_children(Delimiter::PAREN, children).into()
    }

    fn atom(main: &str) -> Operand {
        Atom::without_scripts(main).into()
    }

    #[test]
    fn simple_expression() {
        let expr = super::parse("p^2 - omega_BdG^2 + 2*omega_BdG*p*zeta_BdG").unwrap();
        let expected = root([
            (Operator::NULL, Atom::with_super("p", "2").into()),
            (op('-'), Atom::with_subsuper("omega", "BdG", "2").into()),
            (op('+'), atom("2")),
            (op('*'), Atom::with_sub("omega", "BdG").into()),
            (op('*'), atom("p")),
            (op('*'), Atom::with_sub("zeta", "BdG").into()),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn empty() {
        assert_eq!(super::parse("").unwrap(), root([]));
        assert_eq!(super::parse("   ").unwrap(), root([]));
    }

    #[test]
    fn operator_before_group() {
        let expr = super::parse("(a+b)*c").unwrap();
        let expected = root([
            (
                Operator::NULL,
                group([(Operator::NULL, atom("a")), (op('+'), atom("b"))]),
            ),
            (op('*'), atom("c")),
        ]);
        assert_eq!(expr, expected);

        let expr = super::parse("a*(b/c)").unwrap();
        let expected = root([
            (Operator::NULL, atom("a")),
            (
                op('*'),
                group([(Operator::NULL, atom("b")), (op('/'), atom("c"))]),
            ),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn nested_groups() {
        let expr = super::parse("a + (p^2 + 2*omega*(b - c))*(p^3 - (a*p^2)*(c - d) - a)").unwrap();
        let expected = root([
            (Operator::NULL, atom("a")),
            (
                op('+'),
                group([
                    (Operator::NULL, Atom::with_super("p", "2").into()),
                    (op('+'), atom("2")),
                    (op('*'), atom("omega")),
                    (
                        op('*'),
                        group([(Operator::NULL, atom("b")), (op('-'), atom("c"))]),
                    ),
                ]),
            ),
            (
                op('*'),
                group([
                    (Operator::NULL, Atom::with_super("p", "3").into()),
                    (
                        op('-'),
                        group([
                            (Operator::NULL, atom("a")),
                            (op('*'), Atom::with_super("p", "2").into()),
                        ]),
                    ),
                    (
                        op('*'),
                        group([(Operator::NULL, atom("c")), (op('-'), atom("d"))]),
                    ),
                    (op('-'), atom("a")),
                ]),
            ),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn leading_operators() {
        let expr = super::parse("-(p^2)").unwrap();
        let expected = root([(
            op('-'),
            group([(Operator::NULL, Atom::with_super("p", "2").into())]),
        )]);
        assert_eq!(expr, expected);

        let expr = super::parse("(-a)").unwrap();
        let expected = root([(Operator::NULL, group([(op('-'), atom("a"))]))]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn last_pending_operator_wins() {
        let expr = super::parse("a+-b").unwrap();
        let expected = root([(Operator::NULL, atom("a")), (op('-'), atom("b"))]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn adjacent_groups_use_null() {
        let expr = super::parse("2(a)(b)").unwrap();
        let expected = root([
            (Operator::NULL, atom("2")),
            (Operator::NULL, group([(Operator::NULL, atom("a"))])),
            (Operator::NULL, group([(Operator::NULL, atom("b"))])),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn dangling_operator_leaves_group() {
        let expr = super::parse("(a+)b").unwrap();
        let expected = root([
            (Operator::NULL, group([(Operator::NULL, atom("a"))])),
            (op('+'), atom("b")),
        ]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn empty_group_keeps_pending() {
        let expr = super::parse("a+()b").unwrap();
        let expected = root([(Operator::NULL, atom("a")), (op('+'), atom("b"))]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn trailing_operator_dropped() {
        let expr = super::parse("a+").unwrap();
        assert_eq!(expr, root([(Operator::NULL, atom("a"))]));
    }

    #[test]
    fn bare_leaf() {
        let expr = super::build_expression(&Block::Leaf("x/y")).unwrap();
        let expected = root([(Operator::NULL, atom("x")), (op('/'), atom("y"))]);
        assert_eq!(expr, expected);
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            super::parse("a + $b"),
            Err(TranslationError::MalformedAtom("$b".into()))
        );
        assert_eq!(
            super::parse("(a + _b)"),
            Err(TranslationError::MalformedAtom("_b".into()))
        );
        assert!(matches!(
            super::parse("a + (b"),
            Err(TranslationError::UnbalancedDelimiter { delimiter: '(', .. })
        ));
    }

    #[test]
    fn deep_nesting() {
        let depth = 100_000;
        let inp = format!("{}a+{}b", "(".repeat(depth), ")".repeat(depth));
        let expr = super::parse(&inp).unwrap();
        // the operator dangling from the innermost group surfaces at the root
        assert_eq!(expr.len(), 2);
        assert_eq!(expr[1], (op('+'), atom("b")));

        let mut node: &ExprNode = &expr;
        let mut groups = 0;
        while let Some((_, Operand::Node(inner))) = node.first() {
            assert_eq!(inner.len(), 1);
            node = inner;
            groups += 1;
        }
        assert_eq!(groups, depth);
        assert_eq!(node[0], (Operator::NULL, atom("a")));
    }
}
