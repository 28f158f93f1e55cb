//! Test support helpers
//!
//! Small conveniences shared by the unit and integration tests: building
//! trees and diagnostics from inline source snippets without repeating the
//! unwrap-and-message boilerplate in every case.

use crate::ast::Node;
use crate::processor::parse_source;
use crate::rules::Diagnostic;

/// Build the bracket tree for a snippet, panicking on any failure.
pub fn tree_of(source: &str) -> Node {
    parse_source(source).unwrap_or_else(|err| panic!("snippet failed to build: {}", err))
}

/// Run the full check over a snippet, panicking on lex/structure failures.
pub fn diagnostics_of(source: &str) -> Vec<Diagnostic> {
    crate::processor::check_source(source)
        .unwrap_or_else(|err| panic!("snippet failed to check: {}", err))
}

/// The expected diagnostic for an argument that hugs its predecessor.
pub fn argument_not_wrapped(line: usize, column: usize) -> Diagnostic {
    Diagnostic::new(
        line,
        column,
        "Argument should be wrapped when containing parens are wrapped",
    )
}

/// The expected diagnostic for a closing bracket that hugs the last
/// argument.
pub fn closer_not_wrapped(line: usize, column: usize, bracket: char) -> Diagnostic {
    Diagnostic::new(line, column, format!("Closing '{}' not wrapped", bracket))
}
