//! Single-pass bracket-matching tree builder
//!
//! Consumes the token stream once, left to right, with an explicit stack of
//! open-group frames. Consecutive `Other` tokens accumulate in a pending
//! buffer and flush into a [`Run`] whenever a structural token arrives.
//! Commas stay flat at this stage; grouping children into comma-delimited
//! segments is the rule evaluator's job, which keeps the builder a pure
//! bracket matcher any bracket-aware rule could reuse.
//!
//! Unbalanced or mismatched brackets abort construction with a
//! [`StructuralError`]; a partial tree is never returned.

use crate::ast::{Container, Group, Leaf, Node, Run, StructuralError, TokenClass};
use crate::lexer::Token;

/// An open bracket whose group is still being accumulated.
struct OpenFrame {
    open: Leaf,
    children: Vec<Node>,
}

/// Build a bracket tree from a token sequence, returning the root container.
pub fn build(tokens: Vec<Token>) -> Result<Node, StructuralError> {
    let mut root: Vec<Node> = Vec::new();
    let mut stack: Vec<OpenFrame> = Vec::new();
    let mut pending: Vec<Token> = Vec::new();

    for token in tokens {
        let class = TokenClass::classify(&token);
        if class == TokenClass::Other {
            pending.push(token);
            continue;
        }

        if !pending.is_empty() {
            let run = Node::Run(Run::new(std::mem::take(&mut pending)));
            current_list(&mut root, &mut stack).push(run);
        }

        match class {
            TokenClass::OpenBracket => {
                stack.push(OpenFrame {
                    open: Leaf::new(token),
                    children: Vec::new(),
                });
            }
            TokenClass::CloseBracket => {
                let close = Leaf::new(token);
                let frame = match stack.pop() {
                    Some(frame) => frame,
                    None => {
                        return Err(StructuralError::UnexpectedCloser {
                            found: close.char(),
                            at: close.start(),
                        })
                    }
                };
                let group = Group::new(frame.open, frame.children, close)?;
                current_list(&mut root, &mut stack).push(Node::Group(group));
            }
            TokenClass::Comma => {
                current_list(&mut root, &mut stack).push(Node::Leaf(Leaf::new(token)));
            }
            TokenClass::Other => unreachable!(),
        }
    }

    if !pending.is_empty() {
        let run = Node::Run(Run::new(pending));
        current_list(&mut root, &mut stack).push(run);
    }

    if let Some(frame) = stack.pop() {
        return Err(StructuralError::UnclosedBracket {
            open: frame.open.char(),
            at: frame.open.start(),
        });
    }

    Ok(Node::Container(Container::new(root)))
}

/// The child list new nodes go into: the innermost open frame's, or the
/// root's when no bracket is open.
fn current_list<'a>(
    root: &'a mut Vec<Node>,
    stack: &'a mut Vec<OpenFrame>,
) -> &'a mut Vec<Node> {
    match stack.last_mut() {
        Some(frame) => &mut frame.children,
        None => root,
    }
}
