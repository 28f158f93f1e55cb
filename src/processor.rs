//! Processing API tying the stages together
//!
//! `tokenize` → `build` → `evaluate`, with the two failure modes (lexing,
//! bracket structure) folded into one error type. Both failures mean the
//! check is skipped for the input: they are construction problems, reported
//! separately from style diagnostics, and the evaluator never runs on an
//! input that failed to build.

use std::fmt;

use crate::ast::{Node, StructuralError};
use crate::lexer::{tokenize, LexError};
use crate::parser::build;
use crate::rules::{evaluate, Diagnostic};

/// Why an input could not be checked at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    Lex(LexError),
    Structure(StructuralError),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Lex(err) => write!(f, "{}", err),
            CheckError::Structure(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Lex(err) => Some(err),
            CheckError::Structure(err) => Some(err),
        }
    }
}

impl From<LexError> for CheckError {
    fn from(err: LexError) -> Self {
        CheckError::Lex(err)
    }
}

impl From<StructuralError> for CheckError {
    fn from(err: StructuralError) -> Self {
        CheckError::Structure(err)
    }
}

/// Lex and build a source string into its bracket tree.
pub fn parse_source(source: &str) -> Result<Node, CheckError> {
    let tokens = tokenize(source)?;
    let tree = build(tokens)?;
    Ok(tree)
}

/// Run the whole check: lex, build, evaluate.
pub fn check_source(source: &str) -> Result<Vec<Diagnostic>, CheckError> {
    let tree = parse_source(source)?;
    Ok(evaluate(&tree))
}
