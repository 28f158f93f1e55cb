//! Source location utilities for converting byte offsets to line/column positions
//!
//! The lexer reports byte ranges; everything downstream (nodes, diagnostics)
//! works in line/column terms. `SourceLocation` indexes the line starts of a
//! source string once and converts offsets in O(log n).

use super::span::{Position, Span};
use std::ops::Range;

/// Fast conversion from byte offsets to line/column positions
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position (lines are 1-based)
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let column = byte_offset - self.line_starts[line];

        Position::new(line + 1, column)
    }

    /// Convert a byte range to a span
    pub fn range_to_span(&self, range: &Range<usize>) -> Span {
        Span::new(
            self.byte_to_position(range.start),
            self.byte_to_position(range.end),
        )
    }

    /// Total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
