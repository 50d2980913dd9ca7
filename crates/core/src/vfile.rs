//! The document a syntax tree was parsed from.
//!
//! A [`VFile`] holds the full original text, an optional path, and the
//! diagnostics collected about it. Conversion reads the text once to build
//! a [`Location`] index and never modifies the file.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::location::Location;
use crate::unist::Position;
use crate::{Result, VerbaError};

/// A diagnostic attached to a file.
#[derive(Debug, Clone, PartialEq)]
pub struct VFileMessage {
    /// Human readable reason.
    pub reason: String,
    /// Place in the file the message is about.
    pub position: Option<Position>,
}

/// A virtual file: document text plus metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VFile {
    value: String,
    path: Option<PathBuf>,
    /// Diagnostics collected about this file.
    pub messages: Vec<VFileMessage>,
}

impl VFile {
    /// Creates a file from in-memory text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verba_core::VFile;
    ///
    /// let file = VFile::new("<p>Hello</p>");
    /// assert_eq!(file.to_string(), "<p>Hello</p>");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), path: None, messages: Vec::new() }
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`VerbaError::FileNotFound`] if the path doesn't exist, and
    /// [`VerbaError::Io`] if it can't be read as UTF-8 text.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();

        if !path_buf.exists() {
            return Err(VerbaError::FileNotFound(path_buf));
        }

        let value = fs::read_to_string(&path_buf)?;
        Ok(Self { value, path: Some(path_buf), messages: Vec::new() })
    }

    /// Reads a file from `reader` until EOF, such as standard input.
    ///
    /// ```rust,no_run
    /// use verba_core::VFile;
    ///
    /// let file = VFile::from_reader(std::io::stdin().lock())?;
    /// # Ok::<(), verba_core::VerbaError>(())
    /// ```
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut buffer = String::new();
        reader.read_to_string(&mut buffer)?;

        Ok(Self::new(buffer))
    }

    /// Sets the path of the file.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The document text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The path of the file, if it came from disk or one was set.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Builds a location index over the document text.
    pub fn location(&self) -> Location {
        Location::new(&self.value)
    }

    /// Attaches a diagnostic and returns it.
    pub fn message(&mut self, reason: impl Into<String>, position: Option<Position>) -> &VFileMessage {
        self.messages.push(VFileMessage { reason: reason.into(), position });
        &self.messages[self.messages.len() - 1]
    }
}

impl fmt::Display for VFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for VFile {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VFile {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
