//! Error types for tree construction

use super::span::Position;
use std::fmt;

/// Bracket structure problems that prevent a tree from being built.
///
/// These are fatal to processing the input and are kept strictly apart from
/// style diagnostics: a tree that fails to build is never evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// A closing bracket with no bracket open
    UnexpectedCloser { found: char, at: Position },
    /// A closing bracket of the wrong kind for the innermost open bracket
    MismatchedPair {
        open: char,
        expected: char,
        found: char,
        at: Position,
    },
    /// An opening bracket still open at end of input
    UnclosedBracket { open: char, at: Position },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::UnexpectedCloser { found, at } => {
                write!(f, "unexpected closing '{}' at {}", found, at)
            }
            StructuralError::MismatchedPair {
                open,
                expected,
                found,
                at,
            } => {
                write!(
                    f,
                    "mismatched brackets: expected '{}' to close '{}', found '{}' at {}",
                    expected, open, found, at
                )
            }
            StructuralError::UnclosedBracket { open, at } => {
                write!(f, "unclosed '{}' opened at {}", open, at)
            }
        }
    }
}

impl std::error::Error for StructuralError {}
