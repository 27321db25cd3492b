//! Error types for jobdeck-core
//!
//! The navigation controller itself has no failure-prone I/O; errors are
//! limited to the configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for jobdeck operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON in {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config")]
    ConfigSerialize {
        #[source]
        source: serde_json::Error,
    },
}
