//! Node model for the bracket tree
//!
//! The tree builder turns the flat token stream into a tree of these nodes,
//! mirroring bracket nesting and nothing else. Four node shapes cover the
//! whole vocabulary:
//!
//! - [`Run`] — a maximal span of consecutive structurally-uninteresting
//!   tokens between significant ones;
//! - [`Leaf`] — exactly one structurally significant token (a comma or a
//!   bracket);
//! - [`Group`] — one matched bracket pair and everything between;
//! - [`Container`] — an unlabeled sequence of children, used for the
//!   document root.
//!
//! Nodes are immutable once built and strictly parent-owned. Positions are
//! computed at construction and stored as plain fields, so downstream line
//! comparisons are field reads, never recursive lookups.

use super::error::StructuralError;
use super::span::Position;
use crate::lexer::{Token, TokenKind};

/// The structural classification of a single token.
///
/// Total over all token kinds; everything that is not a comma or a bracket
/// is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Comma,
    OpenBracket,
    CloseBracket,
    Other,
}

impl TokenClass {
    pub fn classify(token: &Token) -> TokenClass {
        match token.kind {
            TokenKind::Comma => TokenClass::Comma,
            kind if kind.is_open_bracket() => TokenClass::OpenBracket,
            kind if kind.is_close_bracket() => TokenClass::CloseBracket,
            _ => TokenClass::Other,
        }
    }

    /// Whether a token of this class becomes a [`Leaf`] rather than part of
    /// a [`Run`].
    pub fn is_structural(self) -> bool {
        self != TokenClass::Other
    }
}

/// The closing character that pairs with an opening bracket.
pub fn matching_closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => unreachable!("'{open}' is not an opening bracket"),
    }
}

/// A maximal sequence of consecutive `Other` tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    tokens: Vec<Token>,
    start: Position,
    end_line: usize,
    content_start: Option<Position>,
}

impl Run {
    /// Construct a run from a non-empty token sequence.
    ///
    /// Panics on an empty sequence; the builder only flushes non-empty
    /// pending buffers.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "a run holds at least one token");
        let start = tokens[0].span.start;
        let end_line = tokens[tokens.len() - 1].span.end.line;
        let content_start = tokens
            .iter()
            .find(|token| !token.kind.is_layout())
            .map(|token| token.span.start);
        Self {
            tokens,
            start,
            end_line,
            content_start,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token texts joined with single spaces, for display purposes.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.tokens.iter().map(|t| t.text.as_str()).collect();
        texts.join(" ")
    }
}

/// A single structurally significant token: a comma or a bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    token: Token,
    class: TokenClass,
}

impl Leaf {
    /// Wrap a structural token.
    ///
    /// Panics if the token classifies as `Other`; constructing a leaf from
    /// a non-structural token is a programming error, not an input error.
    pub fn new(token: Token) -> Self {
        let class = TokenClass::classify(&token);
        assert!(
            class.is_structural(),
            "leaf nodes wrap structural tokens only, got {:?}",
            token.kind
        );
        Self { token, class }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn class(&self) -> TokenClass {
        self.class
    }

    /// The bracket (or comma) character this leaf wraps.
    pub fn char(&self) -> char {
        self.token
            .text
            .chars()
            .next()
            .expect("structural tokens are single characters")
    }

    pub fn start(&self) -> Position {
        self.token.span.start
    }

    pub fn end_line(&self) -> usize {
        self.token.span.end.line
    }
}

/// One matched bracket pair and the children between the brackets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    open: Leaf,
    children: Vec<Node>,
    close: Leaf,
    start: Position,
    end_line: usize,
}

impl Group {
    /// Assemble a group from its opener, accumulated children, and closer.
    ///
    /// The opener and closer characters must form a matching pair;
    /// otherwise the input's bracket structure is malformed and no group
    /// (and no tree) is produced.
    pub fn new(open: Leaf, children: Vec<Node>, close: Leaf) -> Result<Self, StructuralError> {
        assert_eq!(open.class(), TokenClass::OpenBracket);
        assert_eq!(close.class(), TokenClass::CloseBracket);

        let expected = matching_closer(open.char());
        if close.char() != expected {
            return Err(StructuralError::MismatchedPair {
                open: open.char(),
                expected,
                found: close.char(),
                at: close.start(),
            });
        }

        let start = open.start();
        let end_line = close.end_line();
        Ok(Self {
            open,
            children,
            close,
            start,
            end_line,
        })
    }

    pub fn open(&self) -> &Leaf {
        &self.open
    }

    pub fn close(&self) -> &Leaf {
        &self.close
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// An unlabeled sequence of children with no bracket semantics of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    children: Vec<Node>,
    span: Option<(Position, usize)>,
}

impl Container {
    pub fn new(children: Vec<Node>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => Some((first.start(), last.end_line())),
            _ => None,
        };
        Self { children, span }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// A node in the bracket tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Run(Run),
    Leaf(Leaf),
    Group(Group),
    Container(Container),
}

impl Node {
    /// Start position of the node's first token.
    ///
    /// Never queried on an empty container (the invariant is the builder's:
    /// only the document root may be empty, and nothing asks for its
    /// position).
    pub fn start(&self) -> Position {
        match self {
            Node::Run(run) => run.start,
            Node::Leaf(leaf) => leaf.start(),
            Node::Group(group) => group.start,
            Node::Container(container) => {
                container
                    .span
                    .expect("empty containers have no position")
                    .0
            }
        }
    }

    /// The line on which the node's last token ends.
    pub fn end_line(&self) -> usize {
        match self {
            Node::Run(run) => run.end_line,
            Node::Leaf(leaf) => leaf.end_line(),
            Node::Group(group) => group.end_line,
            Node::Container(container) => {
                container
                    .span
                    .expect("empty containers have no position")
                    .1
            }
        }
    }

    /// Where the node's content starts: the position of its first
    /// non-layout token, if it has one.
    ///
    /// Runs made up entirely of line-end and comment tokens have no content
    /// start; brackets and commas always anchor themselves.
    pub fn content_start(&self) -> Option<Position> {
        match self {
            Node::Run(run) => run.content_start,
            Node::Leaf(leaf) => Some(leaf.start()),
            Node::Group(group) => Some(group.start),
            Node::Container(container) => container
                .children
                .iter()
                .find_map(|child| child.content_start()),
        }
    }
}
