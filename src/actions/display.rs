//! Print the text content of selected files.
//!
//! Each file is opened, read in full as UTF-8 and closed before the next one
//! is touched. Binary or unreadable files are reported and skipped.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::confirm::Confirm;
use crate::scanner::FileSelection;

/// Errors that can occur while reading a file for display.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// File was not found.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Content is not valid UTF-8 text.
    #[error("not a text file: {}", .0.display())]
    NotText(PathBuf),

    /// An I/O error occurred.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a whole file as text.
///
/// # Errors
///
/// - `NotFound` / `PermissionDenied` from opening the file
/// - `NotText` if the content is not valid UTF-8
/// - `Io` for anything else
pub fn read_text(path: &Path) -> Result<String, DisplayError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DisplayError::NotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => DisplayError::PermissionDenied(path.to_path_buf()),
        io::ErrorKind::InvalidData => DisplayError::NotText(path.to_path_buf()),
        _ => DisplayError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Configuration for content display.
#[derive(Debug, Clone, Default)]
pub struct DisplayConfig {
    /// Ask before printing each file.
    pub confirm: bool,
}

impl DisplayConfig {
    /// Enable/disable per-file confirmation.
    #[must_use]
    pub fn with_confirm(mut self, confirm: bool) -> Self {
        self.confirm = confirm;
        self
    }
}

/// What happened to each file of a display batch.
#[derive(Debug, Clone, Default)]
pub struct DisplayReport {
    /// Files whose content was printed.
    pub shown: Vec<PathBuf>,
    /// Files the operator declined.
    pub skipped: Vec<PathBuf>,
    /// Files that no longer existed.
    pub missing: Vec<PathBuf>,
    /// Files that could not be read, with the cause.
    pub failures: Vec<(PathBuf, String)>,
}

impl DisplayReport {
    /// Human-readable summary of the batch.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Displayed {} file(s), {} skipped, {} missing, {} unreadable",
            self.shown.len(),
            self.skipped.len(),
            self.missing.len(),
            self.failures.len()
        )
    }
}

/// Print every file of `selection` to `out`, in selection order.
///
/// # Errors
///
/// Returns the I/O error if `out` cannot be written. Read failures on the
/// selected files are reported on `out` and recorded instead.
pub fn display_batch<C, W>(
    selection: &FileSelection,
    config: &DisplayConfig,
    confirm: &mut C,
    out: &mut W,
) -> io::Result<DisplayReport>
where
    C: Confirm + ?Sized,
    W: Write + ?Sized,
{
    let mut report = DisplayReport::default();

    for name in &selection.files {
        let path = selection.path_of(name);

        if !path.exists() {
            writeln!(out, "File '{name}' does not exist.")?;
            report.missing.push(path);
            continue;
        }

        writeln!(out, "Contents of '{name}':")?;

        if config.confirm && !confirm.confirm(&format!("Show '{}'?", path.display())) {
            report.skipped.push(path);
            continue;
        }

        match read_text(&path) {
            Ok(content) => {
                writeln!(out, "{content}")?;
                report.shown.push(path);
            }
            Err(DisplayError::NotFound(_)) => {
                writeln!(out, "File '{name}' does not exist.")?;
                report.missing.push(path);
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("Failed to read {}: {}", path.display(), message);
                writeln!(out, "Error reading '{name}': {message}")?;
                report.failures.push((path, message));
            }
        }
    }

    log::info!("{}", report.summary());
    Ok(report)
}
