//! Conversion between byte offsets and line/column points.
//!
//! [`Location`] pre-computes the byte offset where each line starts, so
//! converting in either direction is a binary search or a lookup:
//!
//! ```text
//! "ab\ncd"     line_starts = [0, 3]
//! to_point(4)  → line 2, column 2, offset 4
//! to_offset(2, 2) → 4
//! ```
//!
//! Lines end at `\r\n`, `\r`, or `\n`, as HTML parsers count them.

use crate::unist::Point;

/// Location index over one document.
#[derive(Debug, Clone)]
pub struct Location {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
    /// Total byte length of the document
    len: usize,
}

impl Location {
    /// Create a new index from the full document text.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];

        for (byte_pos, byte) in bytes.iter().enumerate() {
            match byte {
                b'\n' => line_starts.push(byte_pos + 1),
                b'\r' if bytes.get(byte_pos + 1) != Some(&b'\n') => line_starts.push(byte_pos + 1),
                _ => {}
            }
        }

        Self { line_starts, len: source.len() }
    }

    /// Convert a byte offset into a point.
    ///
    /// Offsets from `0` up to and including the document length are valid.
    pub fn to_point(&self, offset: usize) -> Option<Point> {
        if offset > self.len {
            return None;
        }

        let line = self.line_starts.binary_search(&offset).unwrap_or_else(|i| i - 1);
        let column = offset - self.line_starts[line];

        Some(Point::new(line + 1, column + 1, offset))
    }

    /// Convert a 1-based line and column into a byte offset.
    ///
    /// The column may point at most one past the last character of the line
    /// (its line ending, or the end of the document on the last line).
    pub fn to_offset(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 || column == 0 {
            return None;
        }

        let line_start = *self.line_starts.get(line - 1)?;
        let line_end = self.line_starts.get(line).copied().unwrap_or(self.len + 1);
        let offset = line_start.checked_add(column - 1)?;

        (offset < line_end && offset <= self.len).then_some(offset)
    }

    /// Get the total number of lines in the document
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte length of the document
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let location = Location::new("<p>foo</p>");
        assert_eq!(location.to_point(3), Some(Point::new(1, 4, 3)));
        assert_eq!(location.to_point(10), Some(Point::new(1, 11, 10)));
        assert_eq!(location.to_point(11), None);
    }

    #[test]
    fn test_multi_line() {
        let location = Location::new("ab\ncd\n");
        assert_eq!(location.line_count(), 3);
        assert_eq!(location.to_point(2), Some(Point::new(1, 3, 2)));
        assert_eq!(location.to_point(3), Some(Point::new(2, 1, 3)));
        assert_eq!(location.to_point(6), Some(Point::new(3, 1, 6)));
    }

    #[test]
    fn test_to_offset() {
        let location = Location::new("ab\ncd");
        assert_eq!(location.to_offset(1, 1), Some(0));
        assert_eq!(location.to_offset(1, 3), Some(2));
        assert_eq!(location.to_offset(1, 4), None);
        assert_eq!(location.to_offset(2, 2), Some(4));
        assert_eq!(location.to_offset(2, 3), Some(5));
        assert_eq!(location.to_offset(2, 4), None);
        assert_eq!(location.to_offset(3, 1), None);
        assert_eq!(location.to_offset(0, 1), None);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let location = Location::new("a\r<p>foo</p>\r\nb");
        assert_eq!(location.line_count(), 3);
        assert_eq!(location.to_offset(2, 4), Some(5));
        assert_eq!(location.to_point(5), Some(Point::new(2, 4, 5)));

        // Both bytes of `\r\n` belong to the line they end.
        assert_eq!(location.to_point(13), Some(Point::new(2, 12, 13)));
        assert_eq!(location.to_point(14), Some(Point::new(3, 1, 14)));
        assert_eq!(location.to_offset(2, 12), Some(13));
        assert_eq!(location.to_offset(2, 13), None);
    }

    #[test]
    fn test_huge_column() {
        let location = Location::new("a\nb");
        assert_eq!(location.to_offset(2, usize::MAX), None);
        assert_eq!(location.to_offset(1, usize::MAX), None);
    }

    #[test]
    fn test_empty_document() {
        let location = Location::new("");
        assert!(location.is_empty());
        assert_eq!(location.to_point(0), Some(Point::new(1, 1, 0)));
        assert_eq!(location.to_offset(1, 1), Some(0));
    }

    #[test]
    fn test_multibyte_columns_count_bytes() {
        let location = Location::new("é\nx");
        assert_eq!(location.to_point(2), Some(Point::new(1, 3, 2)));
        assert_eq!(location.to_offset(2, 1), Some(3));
    }

    #[test]
    fn test_round_trip() {
        let source = "one\ntwo three\n\nfour";
        let location = Location::new(source);

        for offset in 0..=source.len() {
            let point = location.to_point(offset).unwrap();
            assert_eq!(location.to_offset(point.line, point.column), Some(offset));
        }
    }
}
