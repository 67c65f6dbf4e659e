//! Configuration error types.

use std::path::PathBuf;

/// Errors raised while locating, loading, saving, or parsing `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform has no per-user configuration directory.
    #[error("no user configuration directory on this platform")]
    NoConfigDir,

    /// Reading the config file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the config file or its directory failed.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File or directory that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Serializing the config to RON failed.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
