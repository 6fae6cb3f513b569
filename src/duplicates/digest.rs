//! MD5 digest of decoded image pixels.

use std::fmt;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use thiserror::Error;

/// Failed to open or decode an image.
#[derive(Debug, Error)]
#[error("failed to decode image {}: {source}", .path.display())]
pub struct DecodeError {
    /// The offending file.
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// 128-bit fingerprint of a decoded pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageDigest([u8; 16]);

impl ImageDigest {
    /// Digest raw pixel bytes.
    #[must_use]
    pub fn of_pixels(pixels: &[u8]) -> Self {
        Self(Md5::digest(pixels).into())
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for ImageDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Decode the image at `path` and digest its pixel buffer.
///
/// The file is opened, decoded and closed inside this call.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the file cannot be read or is not a
/// decodable image.
pub fn image_digest(path: &Path) -> Result<ImageDigest, DecodeError> {
    let img = image::open(path).map_err(|source| DecodeError {
        path: path.to_path_buf(),
        source,
    })?;

    let digest = ImageDigest::of_pixels(img.as_bytes());
    log::trace!(
        "{} ({}x{}) -> {}",
        path.display(),
        img.width(),
        img.height(),
        digest
    );
    Ok(digest)
}
