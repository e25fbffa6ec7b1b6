//! Error types for the `life` binary.
//!
//! [`EngineError`] is the top-level error type that wraps every failure mode
//! between argument parsing and the last printed generation.

use std::path::PathBuf;

use crate::args::ArgsError;

/// Top-level error for the `life` binary.
///
/// Each variant wraps a specific subsystem error, providing a single error
/// type that `run` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: life_core::config::ConfigError,
    },

    /// Command-line arguments were malformed.
    #[error("{source}")]
    Args {
        /// The underlying argument error.
        #[from]
        source: ArgsError,
    },

    /// The seed file could not be opened.
    #[error("failed to open seed file {}: {source}", path.display())]
    InputUnavailable {
        /// Path that was tried.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The grid could not be created.
    #[error("could not create world: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: life_grid::GridError,
    },

    /// The seed could not be read into the grid.
    #[error("seed error: {source}")]
    Seed {
        /// The underlying seed error.
        #[from]
        source: life_core::seed::SeedError,
    },

    /// The generation loop failed.
    #[error("simulation error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: life_core::runner::RunnerError,
    },
}
