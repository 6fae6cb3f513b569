//! filesift - select files by extension and act on them
//!
//! A small CLI that lists the files of one directory carrying a given
//! extension, orders them, and then sends them to the system trash, prints
//! their content, or (independently of the extension) reports images whose
//! decoded pixels are identical.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod scanner;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use actions::{
    delete_batch, display_batch, Confirm, DeleteConfig, DisplayConfig, StdinConfirm, SystemTrash,
    Trash,
};
use cli::{Action, Cli};
use config::Config;
use duplicates::{find_duplicate_images, DetectorConfig};
use error::ExitCode;
use scanner::{find_files_with_extension, FileSelection, ScanError, SortOrder};

/// Fully resolved settings for one run (CLI over config over defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory to scan.
    pub directory: PathBuf,
    /// Raw extension as given; normalized by the scanner.
    pub extension: Option<String>,
    /// Selected action.
    pub action: Action,
    /// Ask before each file.
    pub confirm: bool,
    /// Ordering of the selection.
    pub sort_order: SortOrder,
    /// Seed for the shuffle.
    pub seed: Option<u64>,
    /// Image suffixes for the duplicate finder.
    pub image_extensions: Vec<String>,
}

impl Options {
    /// Merge command-line flags over the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidSortOrder`] when the ordering comes from a
    /// config value that is not `asc`, `desc` or `random`.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, ScanError> {
        let sort_order = match cli.sort_order {
            Some(order) => order,
            None => config.sort_order()?,
        };

        Ok(Self {
            directory: cli.directory.clone(),
            extension: cli.extension.clone(),
            action: cli.action(),
            confirm: cli.confirm || config.confirm,
            sort_order,
            seed: cli.seed.or(config.seed),
            image_extensions: config.image_extensions.clone(),
        })
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Run the application logic for parsed arguments.
///
/// Initializes logging, loads the configuration, and executes against the
/// system trash, standard input and standard output.
///
/// # Errors
///
/// Returns usage errors ([`ScanError`]) and unexpected failures; per-file
/// problems are reported on stdout and never returned.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref());
    let options = Options::resolve(&cli, &config)?;
    log::debug!("Resolved options: {:?}", options);

    let mut confirm = StdinConfirm::stdio();
    let mut out = io::stdout();
    execute(&options, &SystemTrash, &mut confirm, &mut out)
}

/// Execute resolved options against explicit collaborators.
///
/// # Errors
///
/// Same as [`run_app`].
pub fn execute<T, C, W>(
    options: &Options,
    trash: &T,
    confirm: &mut C,
    out: &mut W,
) -> Result<ExitCode>
where
    T: Trash + ?Sized,
    C: Confirm + ?Sized,
    W: Write + ?Sized,
{
    match options.action {
        Action::FindImageDuplicates => {
            let detector =
                DetectorConfig::with_extensions(options.image_extensions.iter().cloned());
            find_duplicate_images(&options.directory, &detector, out)?;
        }
        Action::List => {
            let selection = select(options)?;
            list_selection(&selection, out).context("failed to write file list")?;
        }
        Action::Delete => {
            let selection = select(options)?;
            let config = DeleteConfig::default().with_confirm(options.confirm);
            delete_batch(&selection, &config, trash, confirm, out)
                .context("failed to write deletion report")?;
        }
        Action::Display => {
            let selection = select(options)?;
            let config = DisplayConfig::default().with_confirm(options.confirm);
            display_batch(&selection, &config, confirm, out)
                .context("failed to write file contents")?;
        }
    }

    Ok(ExitCode::Success)
}

fn select(options: &Options) -> Result<FileSelection, ScanError> {
    find_files_with_extension(
        &options.directory,
        options.extension.as_deref().unwrap_or_default(),
        options.sort_order,
        &mut options.rng(),
    )
}

fn list_selection<W: Write + ?Sized>(selection: &FileSelection, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{} file(s) with extension '{}' in '{}':",
        selection.len(),
        selection.extension,
        selection.directory.display()
    )?;
    for name in &selection.files {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
