//! Command-line interface definitions for filesift.
//!
//! This module defines all CLI arguments using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # List the .txt files of a directory, newest name first
//! filesift ~/notes txt --sort-order desc
//!
//! # Send every .log file to the trash, asking for each one
//! filesift /var/tmp/app log --delete --confirm
//!
//! # Print the content of every .md file
//! filesift ./docs .md --display
//!
//! # Find images with identical pixels
//! filesift ~/Pictures --img
//! ```

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::scanner::SortOrder;

/// Select files by extension, then trash them, print them, or find duplicate images.
///
/// Deletion always goes through the system trash, so every removal can be
/// undone from the recycle bin.
#[derive(Debug, Parser)]
#[command(name = "filesift")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("action").args(["delete", "display", "img"]).multiple(false)))]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// File extension to select (leading '.' optional)
    #[arg(value_name = "EXTENSION", required_unless_present = "img")]
    pub extension: Option<String>,

    /// Move the selected files to the trash
    #[arg(long)]
    pub delete: bool,

    /// Print the content of the selected files
    #[arg(long, visible_alias = "display-content")]
    pub display: bool,

    /// Report images with identical pixels in DIRECTORY (ignores EXTENSION)
    #[arg(long)]
    pub img: bool,

    /// Ask before deleting or printing each file (answer 'o' or 'oui')
    #[arg(long)]
    pub confirm: bool,

    /// Order of the selected files [default: asc, or the config value]
    #[arg(long, value_enum, value_name = "ORDER", alias = "sort_order")]
    pub sort_order: Option<SortOrder>,

    /// Seed for `--sort-order random`, for a reproducible shuffle
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Configuration file (default: platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report fatal errors as JSON on stderr
    #[arg(long)]
    pub json_errors: bool,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// What to do with the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print the matched names.
    List,
    /// Send the matched files to the trash.
    Delete,
    /// Print the matched files' content.
    Display,
    /// Scan the directory for duplicate images.
    FindImageDuplicates,
}

impl Cli {
    /// The action selected by the flags. Clap guarantees at most one is set.
    #[must_use]
    pub fn action(&self) -> Action {
        if self.img {
            Action::FindImageDuplicates
        } else if self.delete {
            Action::Delete
        } else if self.display {
            Action::Display
        } else {
            Action::List
        }
    }
}
