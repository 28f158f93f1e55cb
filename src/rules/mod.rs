//! Style rules evaluated over the bracket tree
//!
//! One rule lives here: wrap consistency. The evaluator is a read-only
//! traversal; diagnostics come back in source order.

pub mod diagnostic;
pub mod wrapping;

pub use diagnostic::Diagnostic;
pub use wrapping::evaluate;
