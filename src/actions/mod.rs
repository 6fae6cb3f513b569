//! File actions module.
//!
//! This module provides the actions run over a file selection:
//! - Reversible deletion via the system trash
//! - Content display
//! - Per-file operator confirmation
//!
//! Every action processes one file completely before moving to the next and
//! never aborts the batch on a per-file failure. Failures are printed with the
//! file name and collected in the returned report.
//!
//! # Deletion
//!
//! ```no_run
//! use filesift::actions::{delete_batch, DeleteConfig, FixedAnswer, SystemTrash};
//! use filesift::scanner::{find_files_with_extension, SortOrder};
//! use std::path::Path;
//!
//! let selection =
//!     find_files_with_extension(Path::new("."), "tmp", SortOrder::Asc, &mut rand::thread_rng())
//!         .unwrap();
//! let result = delete_batch(
//!     &selection,
//!     &DeleteConfig::default(),
//!     &SystemTrash,
//!     &mut FixedAnswer(true),
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! println!("{}", result.summary());
//! ```
//!
//! # Display
//!
//! ```no_run
//! use filesift::actions::{display_batch, DisplayConfig, FixedAnswer};
//! use filesift::scanner::{find_files_with_extension, SortOrder};
//! use std::path::Path;
//!
//! let selection =
//!     find_files_with_extension(Path::new("."), "md", SortOrder::Desc, &mut rand::thread_rng())
//!         .unwrap();
//! display_batch(
//!     &selection,
//!     &DisplayConfig::default(),
//!     &mut FixedAnswer(true),
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! ```

pub mod confirm;
pub mod delete;
pub mod display;

// Re-export commonly used types
pub use confirm::{is_affirmative, Confirm, FixedAnswer, StdinConfirm};
pub use delete::{
    delete_batch, delete_to_trash, BatchDeleteResult, DeleteConfig, DeleteError, DeleteResult,
    SystemTrash, Trash,
};
pub use display::{display_batch, read_text, DisplayConfig, DisplayError, DisplayReport};
