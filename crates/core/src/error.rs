//! Error types for conversion operations.
//!
//! This module defines the main error type [`VerbaError`]. The first four
//! variants are precondition failures reported by [`crate::ToNlcst`] before
//! any conversion work begins; the rest come from loading documents and
//! syntax trees.
//!
//! # Example
//!
//! ```rust
//! use verba_core::{ToNlcst, VerbaError};
//!
//! match ToNlcst::new().convert() {
//!     Err(VerbaError::ExpectedNode) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hast to nlcst conversion.
#[derive(Error, Debug)]
pub enum VerbaError {
    /// No tree was given, or the given value is not a typed node.
    #[error("expected node")]
    ExpectedNode,

    /// No document was given to resolve positions against.
    #[error("expected file")]
    ExpectedFile,

    /// No tokenizer was given.
    #[error("expected parser")]
    ExpectedParser,

    /// The tree lacks a line and column on its start point.
    #[error("expected position on nodes")]
    ExpectedPosition,

    /// File not found.
    ///
    /// Returned when reading a document from a path that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors while reading a document.
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed hast or nlcst JSON.
    #[error("Invalid syntax tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for VerbaError.
pub type Result<T> = std::result::Result<T, VerbaError>;
