//! Error types for the page selector.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Page count was not an integer in `1..=MAX_PAGE_COUNT`.
    #[error(
        "Invalid number of pages: {0} (expected 1 to {max})",
        max = crate::state::MAX_PAGE_COUNT
    )]
    InvalidPageCount(String),

    /// A page label that does not belong to the panel.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures while reading `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to determine config directory")]
    NoConfigDir,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
