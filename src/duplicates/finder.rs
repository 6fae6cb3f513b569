//! Single-pass duplicate image finder.
//!
//! # Overview
//!
//! The finder lists the image files directly inside a directory, visits them
//! in ascending name order, digests each decoded pixel buffer and keeps the
//! first name seen per digest in a [`DuplicateIndex`]. Every later file with
//! a known digest is reported as a duplicate of that first name.
//!
//! Visiting in name order makes the choice of original deterministic, so
//! scanning an unchanged directory twice prints the same report.
//!
//! # Example
//!
//! ```no_run
//! use filesift::duplicates::{find_duplicate_images, DetectorConfig};
//! use std::path::Path;
//!
//! let report = find_duplicate_images(
//!     Path::new("./photos"),
//!     &DetectorConfig::default(),
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! println!("{} duplicate(s)", report.duplicates.len());
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use super::digest::{image_digest, ImageDigest};
use crate::scanner::{list_files, ScanError};

/// Image suffixes considered by default. Matching is case-sensitive.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp", ".gif"];

/// Errors that abort a duplicate scan.
///
/// Per-image decode failures are not errors here; they are reported and
/// recorded in [`DuplicateReport::failures`].
#[derive(Debug, Error)]
pub enum DetectError {
    /// The directory could not be listed.
    #[error("cannot scan for duplicate images")]
    Scan(#[from] ScanError),

    /// Writing the report failed.
    #[error("failed to write duplicate report")]
    Output(#[from] io::Error),
}

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// File name suffixes treated as images.
    pub extensions: Vec<String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DetectorConfig {
    /// Use a custom suffix set.
    #[must_use]
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` carries one of the image suffixes.
    #[must_use]
    pub fn is_image(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

/// Digest → first file name seen with that digest.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    originals: HashMap<ImageDigest, String>,
}

impl DuplicateIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` under `digest`.
    ///
    /// Returns the original's name if the digest was already known. The stored
    /// original is never replaced.
    pub fn record(&mut self, digest: ImageDigest, name: &str) -> Option<&str> {
        match self.originals.entry(digest) {
            Entry::Occupied(entry) => Some(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                entry.insert(name.to_string());
                None
            }
        }
    }

    /// Number of distinct digests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.originals.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// Original names, ascending.
    #[must_use]
    pub fn sorted_originals(&self) -> Vec<String> {
        let mut names: Vec<String> = self.originals.values().cloned().collect();
        names.sort_unstable();
        names
    }
}

/// A file whose pixels match an earlier file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair {
    /// The later file.
    pub duplicate: String,
    /// The first file seen with the same pixels.
    pub original: String,
}

/// Everything one scan found.
#[derive(Debug, Clone, Default)]
pub struct DuplicateReport {
    /// Duplicates in the order they were found.
    pub duplicates: Vec<DuplicatePair>,
    /// One name per distinct image, ascending.
    pub originals: Vec<String>,
    /// Files that could not be decoded, with the cause.
    pub failures: Vec<(String, String)>,
    /// Number of image files visited.
    pub scanned: usize,
}

impl DuplicateReport {
    /// Human-readable summary of the scan.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Scanned {} image(s): {} distinct, {} duplicate(s), {} undecodable",
            self.scanned,
            self.originals.len(),
            self.duplicates.len(),
            self.failures.len()
        )
    }
}

/// Scan `directory` for images with identical decoded pixels.
///
/// Writes one `'<dup>' is a duplicate of '<original>'` line per duplicate as
/// it is found, then every original name in ascending order.
///
/// # Errors
///
/// - `Scan` if the directory does not exist or cannot be listed
/// - `Output` if `out` cannot be written
pub fn find_duplicate_images<W: Write + ?Sized>(
    directory: &Path,
    config: &DetectorConfig,
    out: &mut W,
) -> Result<DuplicateReport, DetectError> {
    let mut names: Vec<String> = list_files(directory)?
        .into_iter()
        .filter(|name| config.is_image(name))
        .collect();
    names.sort_unstable();
    log::debug!(
        "Found {} candidate image(s) in {}",
        names.len(),
        directory.display()
    );

    let mut index = DuplicateIndex::new();
    let mut report = DuplicateReport::default();

    for name in names {
        report.scanned += 1;
        let digest = match image_digest(&directory.join(&name)) {
            Ok(digest) => digest,
            Err(e) => {
                let message = e.source.to_string();
                log::warn!("{}", e);
                writeln!(out, "Error decoding '{name}': {message}")?;
                report.failures.push((name, message));
                continue;
            }
        };

        if let Some(original) = index.record(digest, &name) {
            writeln!(out, "'{name}' is a duplicate of '{original}'")?;
            report.duplicates.push(DuplicatePair {
                duplicate: name,
                original: original.to_string(),
            });
        }
    }

    report.originals = index.sorted_originals();
    for name in &report.originals {
        writeln!(out, "{name}")?;
    }

    log::info!("{}", report.summary());
    Ok(report)
}
