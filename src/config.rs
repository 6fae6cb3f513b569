//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. `config.toml` in the platform config directory (or `--config <PATH>`)
//! 3. `FILESIFT_*` environment variables
//! 4. Command-line flags (applied by the caller)
//!
//! A config file that fails to parse is logged and ignored.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::duplicates::DEFAULT_IMAGE_EXTENSIONS;
use crate::scanner::{ScanError, SortOrder};

/// Prefix of the environment variables read by [`Config`].
pub const ENV_PREFIX: &str = "FILESIFT_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default ordering: `asc`, `desc` or `random`.
    pub sort_order: String,
    /// Ask before each deleted or displayed file.
    pub confirm: bool,
    /// Seed for the `random` ordering.
    pub seed: Option<u64>,
    /// Suffixes treated as images by the duplicate finder.
    pub image_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default().to_string(),
            confirm: false,
            seed: None,
            image_extensions: DEFAULT_IMAGE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load the configuration, from `explicit` if given, else from the
    /// default platform path.
    pub fn load(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    log::warn!("Config file {} does not exist", path.display());
                }
                Self::load_from_path(path)
            }
            None => match Self::config_path() {
                Some(path) => Self::load_from_path(path),
                None => {
                    log::debug!("No platform config directory, using defaults and environment");
                    Self::extract_or_default(Self::base_figment().merge(Env::prefixed(ENV_PREFIX)))
                }
            },
        }
    }

    /// Load defaults, then the TOML file at `path` (if present), then the
    /// environment.
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let figment = Self::base_figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract_or_default(figment)
    }

    /// The ordering named by `sort_order`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidSortOrder`] for an unknown value.
    pub fn sort_order(&self) -> Result<SortOrder, ScanError> {
        self.sort_order.parse()
    }

    /// Default platform-specific configuration path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "filesift").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn base_figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn extract_or_default(figment: Figment) -> Self {
        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
