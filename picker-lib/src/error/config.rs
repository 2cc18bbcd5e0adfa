//! Configuration errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`PickerConfig`](crate::config::PickerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
