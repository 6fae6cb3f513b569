//! Ordering policy for a file selection.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::Rng;

use super::ScanError;

/// How a selection is ordered before an action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Lexicographic ascending.
    #[default]
    Asc,
    /// Lexicographic descending.
    Desc,
    /// Uniform shuffle.
    Random,
}

impl SortOrder {
    /// Every accepted spelling, in declaration order.
    pub const NAMES: [&'static str; 3] = ["asc", "desc", "random"];

    /// Reorder `names` in place.
    ///
    /// `rng` is only drawn from for [`SortOrder::Random`], so a seeded
    /// generator gives a reproducible shuffle.
    pub fn apply<R: Rng + ?Sized>(self, names: &mut [String], rng: &mut R) {
        match self {
            Self::Asc => names.sort_unstable(),
            Self::Desc => names.sort_unstable_by(|a, b| b.cmp(a)),
            Self::Random => names.shuffle(rng),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
            Self::Random => write!(f, "random"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            "random" => Ok(Self::Random),
            other => {
                let suggestion = Self::NAMES
                    .iter()
                    .map(|name| (name, strsim::jaro_winkler(other, name)))
                    .filter(|(_, score)| *score > 0.8)
                    .max_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(name, _)| (*name).to_string());
                Err(ScanError::InvalidSortOrder {
                    value: other.to_string(),
                    suggestion,
                })
            }
        }
    }
}
