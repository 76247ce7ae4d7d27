//! # Source Module
//!
//! @title Scanned File Context
//! @author Ramprasad
//!
//! Holds the raw text of the file under analysis and answers the line-level
//! questions detectors and the remediator ask about it.
//!
//! ## Key Types
//!
//! - [`ScanContext`] - The file path and its full text

use crate::error::{Result, SentinelError};
use std::path::Path;

/// Complete context for scanning one source file.
///
/// # Example
///
/// ```rust,ignore
/// let context = ScanContext::from_file(Path::new("handler.go"))?;
/// if let Some(line) = context.first_line_of("../") {
///     println!("traversal on line {}", line);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Path of the scanned file as given by the user.
    pub file_path: String,

    /// Raw file content.
    pub source_code: String,
}

impl ScanContext {
    /// Creates a context from source text already in memory.
    pub fn from_source(file_path: &str, source_code: String) -> Self {
        Self {
            file_path: file_path.to_string(),
            source_code,
        }
    }

    /// Reads a file from disk into a new context.
    ///
    /// # Errors
    ///
    /// Returns [`SentinelError::Read`] if the file is missing, unreadable, or
    /// not valid UTF-8.
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Reading {}", path.display());

        let source_code = std::fs::read_to_string(path).map_err(|source| SentinelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_source(&path.display().to_string(), source_code))
    }

    /// Returns true if the source contains `pattern` anywhere.
    pub fn contains(&self, pattern: &str) -> bool {
        self.source_code.contains(pattern)
    }

    /// Returns the 1-based number of the first line containing `pattern`.
    pub fn first_line_of(&self, pattern: &str) -> Option<usize> {
        first_line_of(&self.source_code, pattern)
    }

    /// Returns the trimmed text of a 1-based line.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.source_code.split('\n').nth(line - 1).map(str::trim)
    }
}

/// Finds the 1-based number of the first `\n`-separated line containing `pattern`.
pub fn first_line_of(code: &str, pattern: &str) -> Option<usize> {
    code.split('\n')
        .position(|line| line.contains(pattern))
        .map(|i| i + 1)
}
