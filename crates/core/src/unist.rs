//! Positional information shared by the produced nlcst tree.
//!
//! Points are 1-based for `line` and `column`, and 0-based for `offset`.
//! Offsets and columns count bytes of the document text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One place in a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Line in the document (1-indexed).
    pub line: usize,
    /// Column on the line (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset into the document (0-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset: Some(offset) }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The span a node covers in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Place of the first character of the node.
    pub start: Point,
    /// Place of the first character after the node.
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Byte range covered by this position, if both points carry offsets.
    pub fn offsets(&self) -> Option<std::ops::Range<usize>> {
        Some(self.start.offset?..self.end.offset?)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
