//! # Writer
//!
//! Persists the patched source back to disk.

use crate::error::{Result, SentinelError};
use std::path::{Path, PathBuf};

/// Where the patched text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the scanned file.
    InPlace,

    /// Write `<stem>_fixed<.ext>` next to the scanned file.
    FixedCopy,

    /// Write nothing.
    DryRun,
}

/// Returns the `<stem>_fixed<.ext>` sibling of `path`.
///
/// ```rust,ignore
/// assert_eq!(fixed_copy_path(Path::new("src/main.go")), PathBuf::from("src/main_fixed.go"));
/// ```
pub fn fixed_copy_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{}_fixed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_fixed", stem),
    };

    path.with_file_name(name)
}

/// Writes `content` according to `mode`.
///
/// Returns the path written, or `None` when nothing was written. An in-place
/// write is skipped when `content` equals `original`.
///
/// # Errors
///
/// Returns [`SentinelError::Write`] if the target cannot be written.
pub fn write_result(
    path: &Path,
    original: &str,
    content: &str,
    mode: WriteMode,
) -> Result<Option<PathBuf>> {
    let target = match mode {
        WriteMode::DryRun => return Ok(None),
        WriteMode::InPlace if original == content => {
            log::info!("{} unchanged, not rewriting", path.display());
            return Ok(None);
        }
        WriteMode::InPlace => path.to_path_buf(),
        WriteMode::FixedCopy => fixed_copy_path(path),
    };

    std::fs::write(&target, content).map_err(|source| SentinelError::Write {
        path: target.clone(),
        source,
    })?;

    log::info!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(Some(target))
}
