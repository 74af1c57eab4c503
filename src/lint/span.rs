//! Source location spans.
//!
//! This module provides types for tracking source locations
//! for findings, enabling precise error reporting.

use std::path::PathBuf;

/// A source location span representing a range in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Starting line (1-indexed).
    pub start_line: usize,
    /// Starting column (1-indexed).
    pub start_col: usize,
    /// Ending line (1-indexed).
    pub end_line: usize,
    /// Ending column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span pointing at a whole file.
    ///
    /// Used when only the file a value came from is known.
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::line(file, 1)
    }

    /// Create a span covering a single line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            start_line: line,
            start_col: 1,
            end_line: line,
            end_col: usize::MAX,
        }
    }

    /// Create a span with precise positions.
    pub fn new(
        file: impl Into<PathBuf>,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }
}
