//! Parenthesis structure of the raw input
//!
//! This is the first pass over the text. It only looks at `(` and `)` and produces a [`Block`]
//! tree whose leaves are the untouched spans between them. Leaves borrow from the input.
use crate::error::{Result, TranslationError};
use log::trace;
use std::mem;

/// A node of the block tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// A non-empty span of text containing no parentheses
    Leaf(&'a str),
    /// The contents of a pair of parentheses, or the whole input at the root
    Group(Vec<Block<'a>>),
}

impl<'a> Block<'a> {
    /// The number of leaves anywhere below this block
    pub fn num_leaves(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(block) = pending.pop() {
            match block {
                Block::Leaf(_) => count += 1,
                Block::Group(children) => pending.extend(children),
            }
        }
        count
    }
}

// nesting depth is unbounded, so children are torn down from a work list
impl Drop for Block<'_> {
    fn drop(&mut self) {
        if let Block::Group(children) = self {
            let mut pending = mem::take(children);
            while let Some(mut block) = pending.pop() {
                if let Block::Group(inner) = &mut block {
                    pending.append(inner);
                }
            }
        }
    }
}

/// Split the input into a tree of parenthesized groups
///
/// The returned block is always a [`Group`][Block::Group] standing for the whole input. Spaces
/// are kept in the leaves.
///
/// # Errors
/// [`TranslationError::UnbalancedDelimiter`] on a `)` with nothing to close, or a `(` that is
/// still open at the end of the input.
///
/// # Example
/// ```
/// use txt2latex::{parse_blocks, Block};
///
/// let blocks = parse_blocks("(a+b)*c").unwrap();
/// assert_eq!(
///     blocks,
///     Block::Group(vec![Block::Group(vec![Block::Leaf("a+b")]), Block::Leaf("*c")])
/// );
/// ```
pub fn parse_blocks(inp: &str) -> Result<Block<'_>> {
    // each entry is an open group with the offset of the `(` that started it
    let mut stack: Vec<(usize, Vec<Block<'_>>)> = vec![(0, Vec::new())];
    let mut start = 0;

    for (pos, chr) in inp.char_indices() {
        match chr {
            '(' => {
                flush(&mut stack, &inp[start..pos]);
                stack.push((pos, Vec::new()));
                start = pos + 1;
                trace!("open group at {pos}, depth {}", stack.len() - 1);
            }
            ')' => {
                flush(&mut stack, &inp[start..pos]);
                if stack.len() < 2 {
                    return Err(TranslationError::UnbalancedDelimiter {
                        delimiter: ')',
                        position: pos,
                    });
                }
                if let Some((_, group)) = stack.pop() {
                    push(&mut stack, Block::Group(group));
                }
                start = pos + 1;
                trace!("close group at {pos}, depth {}", stack.len() - 1);
            }
            _ => {}
        }
    }
    flush(&mut stack, &inp[start..]);

    // the outermost group still open is the one reported
    if let Some(&(position, _)) = stack.get(1) {
        return Err(TranslationError::UnbalancedDelimiter {
            delimiter: '(',
            position,
        });
    }
    let root = stack.pop().map(|(_, root)| root).unwrap_or_default();
    Ok(Block::Group(root))
}

fn push<'a>(stack: &mut [(usize, Vec<Block<'a>>)], block: Block<'a>) {
    if let Some((_, top)) = stack.last_mut() {
        top.push(block);
    }
}

fn flush<'a>(stack: &mut [(usize, Vec<Block<'a>>)], span: &'a str) {
    if !span.is_empty() {
        push(stack, Block::Leaf(span));
    }
}
