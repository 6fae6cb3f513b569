//! Reversible file deletion through the system trash.
//!
//! # Overview
//!
//! This module sends the files of a selection to the trash:
//! - Never unlinks directly; every removal is recoverable
//! - Optional per-file confirmation
//! - Missing files are reported and skipped
//! - A failing file never stops the batch
//!
//! The trash itself sits behind the [`Trash`] trait so batches can run
//! against a recording fake.
//!
//! # Example
//!
//! ```no_run
//! use filesift::actions::delete::{delete_to_trash, SystemTrash};
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("/path/to/old.log");
//! match delete_to_trash(&path, &SystemTrash) {
//!     Ok(result) => println!("Trashed: {}", result.path.display()),
//!     Err(e) => eprintln!("Failed: {}", e),
//! }
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::confirm::Confirm;
use crate::scanner::FileSelection;

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission denied when inspecting the file.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Trash operation failed.
    #[error("trash operation failed for {}: {message}", .path.display())]
    TrashFailed { path: PathBuf, message: String },

    /// General I/O error.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p)
            | Self::PermissionDenied(p)
            | Self::TrashFailed { path: p, .. }
            | Self::Io { path: p, .. } => p,
        }
    }

    fn from_io(path: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: e,
            },
        }
    }
}

/// A recoverable holding area for removed files.
pub trait Trash {
    /// Move `path` to the trash.
    ///
    /// # Errors
    ///
    /// Returns `TrashFailed` when the platform refuses the operation.
    fn trash(&self, path: &Path) -> Result<(), DeleteError>;
}

/// The platform recycle bin, through the `trash` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn trash(&self, path: &Path) -> Result<(), DeleteError> {
        trash::delete(path).map_err(|e| {
            log::error!("Trash operation failed for {}: {}", path.display(), e);
            DeleteError::TrashFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}

/// Result of a successful deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    /// Path that was trashed.
    pub path: PathBuf,
    /// Size of the file in bytes at deletion time.
    pub size: u64,
}

/// Outcome of a batch deletion, one entry per processed file.
#[derive(Debug, Clone, Default)]
pub struct BatchDeleteResult {
    /// Files moved to the trash, in processing order.
    pub trashed: Vec<DeleteResult>,
    /// Files the operator declined.
    pub skipped: Vec<PathBuf>,
    /// Files that no longer existed.
    pub missing: Vec<PathBuf>,
    /// Files the trash refused, with the cause.
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchDeleteResult {
    /// Total bytes sent to the trash.
    #[must_use]
    pub fn bytes_trashed(&self) -> u64 {
        self.trashed.iter().map(|r| r.size).sum()
    }

    /// Whether no file failed.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the operation.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trashed {} file(s) ({} bytes), {} skipped, {} missing, {} failed",
            self.trashed.len(),
            self.bytes_trashed(),
            self.skipped.len(),
            self.missing.len(),
            self.failures.len()
        )
    }
}

/// Configuration for batch deletion.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfig {
    /// Ask before each file.
    pub confirm: bool,
}

impl DeleteConfig {
    /// Enable/disable per-file confirmation.
    #[must_use]
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

/// Move a single file to the trash.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if its metadata can't be read
/// - `TrashFailed` if the trash operation fails
pub fn delete_to_trash<T: Trash + ?Sized>(
    path: &Path,
    trash: &T,
) -> Result<DeleteResult, DeleteError> {
    let size = fs::metadata(path)
        .map_err(|e| DeleteError::from_io(path, e))?
        .len();

    trash.trash(path)?;

    log::info!("Moved to trash: {} ({} bytes)", path.display(), size);
    Ok(DeleteResult {
        path: path.to_path_buf(),
        size,
    })
}

/// Send every file of `selection` to the trash, in selection order.
///
/// Operator-facing messages are written to `out`. Per-file problems are
/// reported there and recorded in the result; only a failure to write to
/// `out` is returned as an error.
///
/// # Errors
///
/// Returns the I/O error if `out` cannot be written.
pub fn delete_batch<T, C, W>(
    selection: &FileSelection,
    config: &DeleteConfig,
    trash: &T,
    confirm: &mut C,
    out: &mut W,
) -> io::Result<BatchDeleteResult>
where
    T: Trash + ?Sized,
    C: Confirm + ?Sized,
    W: Write + ?Sized,
{
    let mut result = BatchDeleteResult::default();
    writeln!(out, "Files to delete:")?;

    for name in &selection.files {
        let path = selection.path_of(name);

        if config.confirm && !confirm.confirm(&format!("Move '{}' to trash?", path.display())) {
            log::debug!("Declined: {}", path.display());
            result.skipped.push(path);
            continue;
        }

        match delete_to_trash(&path, trash) {
            Ok(deleted) => {
                writeln!(out, "File '{name}' moved to trash.")?;
                result.trashed.push(deleted);
            }
            Err(DeleteError::NotFound(_)) => {
                writeln!(out, "File '{name}' does not exist.")?;
                result.missing.push(path);
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("Failed to delete {}: {}", path.display(), message);
                writeln!(out, "Error moving '{name}' to trash: {message}")?;
                result.failures.push((path, message));
            }
        }
    }

    log::info!("{}", result.summary());
    Ok(result)
}
