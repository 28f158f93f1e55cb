//! Lexer driver producing positioned tokens
//!
//! The actual tokenization is handled entirely by logos; this module runs
//! the lexer over a source string and attaches line/column spans to the
//! byte ranges logos reports.

use logos::Logos;
use std::fmt;

use crate::ast::{Position, SourceLocation};
use crate::lexer::tokens::{Token, TokenKind};

/// A character sequence the lexer could not tokenize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub at: Position,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized token at {}", self.at)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string, collecting all tokens with line/column spans.
///
/// Fails on the first input the token grammar cannot account for (stray
/// backslashes, unterminated strings, non-ASCII punctuation). Callers treat
/// this the same way as unbalanced brackets: the check is skipped for the
/// input, and no style diagnostics are produced.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let location = SourceLocation::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(kind) => {
                let span = location.range_to_span(&range);
                tokens.push(Token::new(kind, lexer.slice(), span));
            }
            Err(()) => {
                return Err(LexError {
                    at: location.byte_to_position(range.start),
                });
            }
        }
    }

    Ok(tokens)
}
