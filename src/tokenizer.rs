use crate::operator::{operators, DefaultOperators, Operator};
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// A token read from a leaf of the block tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An operator character
    Operator(Operator),
    /// The raw text of an atom with all whitespace removed, ready to be parsed as an
    /// [`Atom`][crate::Atom]
    Atom(String),
}

/// A tokenizer that splits a parenthesis-free span on operator characters
///
/// Whitespace is dropped wherever it appears, so `2 x` reads as the single atom `2x`. Every
/// operator character is yielded, including consecutive ones; deciding which of them applies to
/// the next atom is up to the caller.
///
/// # Example
/// ```
/// use txt2latex::{Token, Tokenizer};
///
/// let res: Vec<_> = Tokenizer::new("a + b_1").collect();
/// assert!(matches!(res[1], Token::Operator(op) if op.symbol == Some('+')));
/// assert_eq!(res[2], Token::Atom("b_1".into()));
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 'b> {
    remaining: Peekable<Chars<'a>>,
    operators: &'b DefaultOperators,
}

impl<'a> Tokenizer<'a, 'static> {
    /// Create a tokenizer using the default operators
    pub fn new(inp: &'a str) -> Self {
        Self::with_operators(inp, operators())
    }
}

impl<'a, 'b> Tokenizer<'a, 'b> {
    pub(crate) fn with_operators(inp: &'a str, operators: &'b DefaultOperators) -> Self {
        Tokenizer {
            remaining: inp.chars().peekable(),
            operators,
        }
    }
}

impl<'a, 'b> Iterator for Tokenizer<'a, 'b> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut atom = String::new();
        while let Some(&chr) = self.remaining.peek() {
            if chr.is_whitespace() {
                self.remaining.next();
            } else if let Some(&op) = self.operators.get(chr) {
                if atom.is_empty() {
                    self.remaining.next();
                    return Some(Token::Operator(op));
                }
                // leave the operator for the next call
                break;
            } else {
                atom.push(chr);
                self.remaining.next();
            }
        }
        if atom.is_empty() {
            None
        } else {
            Some(Token::Atom(atom))
        }
    }
}

impl<'a, 'b> FusedIterator for Tokenizer<'a, 'b> {}

#[cfg(test)]
mod tests {
    use crate::operator::{operators, DefaultOperators, Format, Operator};
    use crate::{Token, Tokenizer};

    fn op(symbol: char) -> Token {
        Token::Operator(*operators().get(symbol).unwrap())
    }

    fn atom(raw: &str) -> Token {
        Token::Atom(raw.into())
    }

    #[test]
    fn simple_expression() {
        let tokens: Vec<_> = Tokenizer::new("p^2 - omega_BdG^2 + 2*omega_BdG*p*zeta_BdG").collect();
        assert_eq!(
            *tokens,
            [
                atom("p^2"),
                op('-'),
                atom("omega_BdG^2"),
                op('+'),
                atom("2"),
                op('*'),
                atom("omega_BdG"),
                op('*'),
                atom("p"),
                op('*'),
                atom("zeta_BdG"),
            ]
        );
    }

    #[test]
    fn spaces_are_insignificant() {
        let tokens: Vec<_> = Tokenizer::new(" 2 x\t/ y _ 1 ").collect();
        assert_eq!(*tokens, [atom("2x"), op('/'), atom("y_1")]);
    }

    #[test]
    fn consecutive_operators() {
        let tokens: Vec<_> = Tokenizer::new("a+-b*").collect();
        assert_eq!(*tokens, [atom("a"), op('+'), op('-'), atom("b"), op('*')]);
    }

    #[test]
    fn only_operators() {
        let tokens: Vec<_> = Tokenizer::new(" - ").collect();
        assert_eq!(*tokens, [op('-')]);
        assert!(Tokenizer::new("   ").next().is_none());
    }

    #[test]
    fn custom_table() {
        let table = DefaultOperators::from_iter_hasher([Operator::new('+', 1, Format::Spaced)]);
        let tokens: Vec<_> = Tokenizer::with_operators("a+b*c", &table).collect();
        assert_eq!(*tokens, [atom("a"), op('+'), atom("b*c")]);
    }
}
