//! # wraplint
//!
//! A checker for badly wrapped bracketed groups in Python-like source.
//!
//! The rule: once a bracketed group (call arguments, a list/dict/tuple
//! literal, a parameter list) spans more than one line, every
//! comma-separated element inside it and the closing bracket must begin on
//! its own line. Elements that start on the line where the previous element
//! ended are reported as not wrapped.
//!
//! ```text
//! foo(
//!     "abc", bar, 123,
//! )
//! ```
//!
//! flags `bar` and `123`, while both the fully wrapped form and the fully
//! unwrapped single-line call are clean.
//!
//! The pipeline has three stages: the [`lexer`] turns source text into
//! positioned tokens, the [`parser`] matches brackets into a tree of
//! [`ast`] nodes, and the [`rules`] evaluator walks that tree and collects
//! diagnostics. [`processor`] ties the stages together for callers.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod rules;
pub mod testing;

pub use processor::{check_source, parse_source, CheckError};
pub use rules::Diagnostic;
