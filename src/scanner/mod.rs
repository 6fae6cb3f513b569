//! Scanner module for selecting files in a single directory.
//!
//! This module provides functionality for:
//! - Extension normalization (`"txt"` becomes `".txt"`)
//! - Listing the regular files directly inside a directory
//! - Ordering the selection (ascending, descending, shuffled)
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`order`]: The [`SortOrder`] policy applied to a selection
//!
//! # Example
//!
//! ```no_run
//! use filesift::scanner::{find_files_with_extension, SortOrder};
//! use std::path::Path;
//!
//! let mut rng = rand::thread_rng();
//! let selection =
//!     find_files_with_extension(Path::new("."), "txt", SortOrder::Asc, &mut rng).unwrap();
//! for name in &selection.files {
//!     println!("{}", selection.path_of(name).display());
//! }
//! ```

pub mod order;

use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use walkdir::WalkDir;

pub use order::SortOrder;

/// Errors raised while building a file selection.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory to scan does not exist or is not a directory.
    #[error("directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The extension was empty.
    #[error("an extension must be specified")]
    EmptyExtension,

    /// No file in the directory carries the extension.
    #[error("no file with extension '{extension}' found in directory '{}'", .directory.display())]
    NoMatches {
        directory: PathBuf,
        extension: String,
    },

    /// The sort order is not one of `asc`, `desc`, `random`.
    #[error("invalid sort order '{value}': expected 'asc', 'desc' or 'random'{}", hint(.suggestion))]
    InvalidSortOrder {
        value: String,
        suggestion: Option<String>,
    },

    /// The directory exists but could not be listed.
    #[error("failed to list directory '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

impl ScanError {
    /// Whether this error comes from a bad invocation rather than the environment.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Files selected in one directory, in their final processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    /// Directory the names are relative to.
    pub directory: PathBuf,
    /// Normalized extension (always starts with `.`).
    pub extension: String,
    /// File names, ordered.
    pub files: Vec<String>,
}

impl FileSelection {
    /// Full path of a selected file name.
    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.directory.join(name)
    }

    /// Number of selected files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Normalize a user-supplied extension.
///
/// # Errors
///
/// Returns [`ScanError::EmptyExtension`] for an empty or blank extension.
///
/// # Example
///
/// ```
/// use filesift::scanner::normalize_extension;
///
/// assert_eq!(normalize_extension("txt").unwrap(), ".txt");
/// assert_eq!(normalize_extension(".md").unwrap(), ".md");
/// assert!(normalize_extension("").is_err());
/// ```
pub fn normalize_extension(extension: &str) -> Result<String, ScanError> {
    let extension = extension.trim();
    if extension.is_empty() {
        return Err(ScanError::EmptyExtension);
    }
    if extension.starts_with('.') {
        Ok(extension.to_string())
    } else {
        Ok(format!(".{extension}"))
    }
}

/// Names of the regular files directly inside `directory`, in directory order.
///
/// Subdirectories are never returned and never descended into. Symbolic links
/// count when they point at a regular file. Names that are not valid UTF-8
/// are skipped with a warning.
///
/// # Errors
///
/// - `DirectoryNotFound` if `directory` is not an existing directory
/// - `Io` if the directory itself cannot be read
pub fn list_files(directory: &Path) -> Result<Vec<String>, ScanError> {
    if !directory.is_dir() {
        return Err(ScanError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut names = Vec::new();
    let walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(ScanError::Io {
                    path: directory.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {}", entry.path().display());
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => log::warn!(
                "Skipping file with non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    log::debug!("Listed {} file(s) in {}", names.len(), directory.display());
    Ok(names)
}

/// Select the files in `directory` whose name ends with `extension`.
///
/// The extension is normalized first and matched case-sensitively, so `".PNG"`
/// never matches `"photo.png"`. The selection is ordered by `order`; `rng` is
/// only consulted for [`SortOrder::Random`].
///
/// # Errors
///
/// Checked in this order:
/// - `DirectoryNotFound` if `directory` is not an existing directory
/// - `EmptyExtension` if the extension is blank
/// - `NoMatches` if no file carries the extension
pub fn find_files_with_extension<R: Rng + ?Sized>(
    directory: &Path,
    extension: &str,
    order: SortOrder,
    rng: &mut R,
) -> Result<FileSelection, ScanError> {
    if !directory.is_dir() {
        return Err(ScanError::DirectoryNotFound(directory.to_path_buf()));
    }
    let extension = normalize_extension(extension)?;

    let mut files: Vec<String> = list_files(directory)?
        .into_iter()
        .filter(|name| name.ends_with(&extension))
        .collect();

    if files.is_empty() {
        return Err(ScanError::NoMatches {
            directory: directory.to_path_buf(),
            extension,
        });
    }

    order.apply(&mut files, rng);
    log::debug!(
        "Selected {} '{}' file(s) in {} ({} order)",
        files.len(),
        extension,
        directory.display(),
        order
    );

    Ok(FileSelection {
        directory: directory.to_path_buf(),
        extension,
        files,
    })
}
