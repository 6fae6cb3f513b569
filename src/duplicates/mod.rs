//! Duplicate image detection.
//!
//! This module provides functionality for:
//! - Digesting the decoded pixels of an image (see [`digest`])
//! - Tracking the first file seen for each digest (see [`finder::DuplicateIndex`])
//! - Scanning a directory and reporting duplicates (see [`finder::find_duplicate_images`])
//!
//! Two files are duplicates when their decoded pixel buffers are byte-equal.
//! The encoded bytes on disk are never compared, so a PNG re-saved with a
//! different compression level is still a duplicate of the original.
//!
//! The pixel buffer is whatever the `image` decoder produces, so the result
//! depends on the decoder: color-profile handling or a different decoder
//! version can change the buffer for the same source file.

pub mod digest;
pub mod finder;

pub use digest::{image_digest, DecodeError, ImageDigest};
pub use finder::{
    find_duplicate_images, DetectError, DetectorConfig, DuplicateIndex, DuplicatePair,
    DuplicateReport, DEFAULT_IMAGE_EXTENSIONS,
};
