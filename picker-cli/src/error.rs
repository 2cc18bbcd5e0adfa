//! CLI error type

use std::path::PathBuf;

use picker_lib::{ConfigError, PayloadError};
use thiserror::Error;

/// Errors that end the CLI with a non-zero exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Payload(#[from] PayloadError),
}
