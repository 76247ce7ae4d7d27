//! # Error Types
//!
//! Errors surfaced by the scanning pipeline. The binary wraps these in
//! `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while reading, prompting, or writing.
#[derive(Debug, Error)]
pub enum SentinelError {
    /// The file to scan could not be read.
    #[error("Error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The patched file could not be written.
    #[error("Error saving file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the terminal failed.
    #[error("Failed to read answer from terminal: {0}")]
    Prompt(#[from] std::io::Error),

    /// No file path was given.
    #[error("No file path provided")]
    EmptyPath,
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, SentinelError>;
