//! Lexer for Python-like source
//!
//! Turns raw text into the positioned token stream the tree builder
//! consumes. See [`tokens`] for the token grammar and [`lexer_impl`] for
//! the driver.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, LexError};
pub use tokens::{Token, TokenKind};
