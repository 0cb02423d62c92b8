//! # Library Error Types

use crate::lifecycle::{Dist, LifecyclePhase};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("config io error at {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid configuration TOML.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors raised by lifecycle callbacks.
#[derive(Error, Debug)]
pub enum TesseraError {
    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A callback arrived before the phase it depends on.
    #[error("{attempted:?} requested while in {current:?}")]
    OutOfOrder {
        /// Phase the host tried to enter.
        attempted: LifecyclePhase,
        /// Phase the library was in.
        current: LifecyclePhase,
    },

    /// A side-specific callback arrived on the other side.
    #[error("{attempted:?} is not valid on {dist:?}")]
    WrongDist {
        /// Phase the host tried to enter.
        attempted: LifecyclePhase,
        /// Side the library runs on.
        dist: Dist,
    },
}

/// Result type for library operations.
pub type TesseraResult<T> = Result<T, TesseraError>;
