//! Token definitions for Python-like source
//!
//! The token kinds are defined using the logos derive macro. The lexer only
//! needs to be faithful about the things the wrapping check cares about:
//! every comma and bracket must come out as its own token, strings and
//! comments must be skipped over as opaque units (a comma inside a string is
//! not a separator), and physical line ends must be emitted as tokens so
//! that runs of text keep their line spans.
//!
//! Horizontal whitespace and backslash line continuations carry no
//! structure and are skipped outright.

use logos::{Lexer, Logos};
use serde::Serialize;

use crate::ast::Span;

/// All token kinds produced by the lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\x0c]+")]
#[logos(skip r"\\\r?\n")]
pub enum TokenKind {
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,

    /// Physical end of line; kept as a token so runs retain their line span
    #[token("\n")]
    Newline,

    #[regex(r"#[^\n]*")]
    Comment,

    /// String literals, including multi-line triple-quoted forms
    #[regex(r#"([rRbBuUfF][rRbBuUfF]?)?"([^"\\\n]|\\.|\\\n)*""#)]
    #[regex(r"([rRbBuUfF][rRbBuUfF]?)?'([^'\\\n]|\\.|\\\n)*'")]
    #[regex(r#"([rRbBuUfF][rRbBuUfF]?)?""""#, long_double_quoted)]
    #[regex(r"([rRbBuUfF][rRbBuUfF]?)?'''", long_single_quoted)]
    Str,

    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][-+]?[0-9_]+)?[jJ]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][-+]?[0-9_]+)?[jJ]?")]
    #[regex(r"0[xXoObB][0-9a-fA-F_]+")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    /// Maximal runs of operator and punctuation characters
    #[regex(r"[-+*/%@&|^~<>=!.:;]+")]
    Op,
}

impl TokenKind {
    /// Layout tokens contribute to a run's line span but never anchor an
    /// argument: a wrapped argument "starts" at its first non-layout token.
    pub fn is_layout(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Comment)
    }

    pub fn is_open_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen | TokenKind::LeftBracket | TokenKind::LeftBrace
        )
    }

    pub fn is_close_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::RightParen | TokenKind::RightBracket | TokenKind::RightBrace
        )
    }
}

/// Scan a triple-quoted string: the opening delimiter has been consumed,
/// bump the lexer past the matching closer.
fn scan_long_string(lex: &mut Lexer<'_, TokenKind>, close: &str) -> bool {
    match lex.remainder().find(close) {
        Some(idx) => {
            lex.bump(idx + close.len());
            true
        }
        None => false,
    }
}

fn long_double_quoted(lex: &mut Lexer<'_, TokenKind>) -> bool {
    scan_long_string(lex, "\"\"\"")
}

fn long_single_quoted(lex: &mut Lexer<'_, TokenKind>) -> bool {
    scan_long_string(lex, "'''")
}

/// A lexed token: kind, literal text, and line/column span
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .map(|result| result.expect("unexpected lex error"))
            .collect()
    }

    #[test]
    fn test_call_tokenization() {
        assert_eq!(
            kinds("foo(\"abc\", bar, 123)"),
            vec![
                TokenKind::Name,
                TokenKind::LeftParen,
                TokenKind::Str,
                TokenKind::Comma,
                TokenKind::Name,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_newlines_are_tokens() {
        assert_eq!(
            kinds("foo(\n)"),
            vec![
                TokenKind::Name,
                TokenKind::LeftParen,
                TokenKind::Newline,
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_horizontal_whitespace_is_skipped() {
        assert_eq!(kinds("a   b\tc"), vec![TokenKind::Name; 3]);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            kinds("x  # trailing, (with) [brackets]\ny"),
            vec![
                TokenKind::Name,
                TokenKind::Comment,
                TokenKind::Newline,
                TokenKind::Name,
            ]
        );
    }

    #[test]
    fn test_string_hides_commas_and_brackets() {
        assert_eq!(kinds(r#""a, (b)""#), vec![TokenKind::Str]);
        assert_eq!(kinds(r#"'don\'t'"#), vec![TokenKind::Str]);
    }

    #[test]
    fn test_prefixed_strings() {
        assert_eq!(kinds(r#"r"\d+""#), vec![TokenKind::Str]);
        assert_eq!(kinds(r#"rb"bytes""#), vec![TokenKind::Str]);
        assert_eq!(kinds(r#"f"{x}""#), vec![TokenKind::Str]);
    }

    #[test]
    fn test_triple_quoted_string_spans_lines() {
        assert_eq!(kinds("\"\"\"a,\nb)\n\"\"\""), vec![TokenKind::Str]);
        assert_eq!(kinds("'''multi\nline'''"), vec![TokenKind::Str]);
    }

    #[test]
    fn test_empty_triple_quoted_string() {
        assert_eq!(kinds("\"\"\"\"\"\""), vec![TokenKind::Str]);
    }

    #[test]
    fn test_unterminated_long_string_is_an_error() {
        let results: Vec<_> = TokenKind::lexer("'''never closed").collect();
        assert!(results.iter().any(|result| result.is_err()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("123"), vec![TokenKind::Number]);
        assert_eq!(kinds("1_000.5e-3"), vec![TokenKind::Number]);
        assert_eq!(kinds("0xff"), vec![TokenKind::Number]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number]);
    }

    #[test]
    fn test_operator_runs() {
        assert_eq!(
            kinds("a == b"),
            vec![TokenKind::Name, TokenKind::Op, TokenKind::Name]
        );
        assert_eq!(
            kinds("x := y"),
            vec![TokenKind::Name, TokenKind::Op, TokenKind::Name]
        );
    }

    #[test]
    fn test_backslash_continuation_is_skipped() {
        assert_eq!(kinds("a \\\nb"), vec![TokenKind::Name, TokenKind::Name]);
    }

    #[test]
    fn test_layout_predicate() {
        assert!(TokenKind::Newline.is_layout());
        assert!(TokenKind::Comment.is_layout());
        assert!(!TokenKind::Name.is_layout());
        assert!(!TokenKind::Comma.is_layout());
    }
}
