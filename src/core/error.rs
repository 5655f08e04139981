//! Error types for configuration checks and per-file processing

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the counting pipeline
pub type Result<T> = std::result::Result<T, WordcountError>;

/// Errors raised while validating options or processing a single input file.
///
/// `Config` is fatal for the whole batch. Every other variant is scoped to
/// one input file and ends up inside that file's outcome.
#[derive(Error, Debug)]
pub enum WordcountError {
    /// Invalid option combination, detected before any file is touched
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input path could not be resolved, opened or read
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The frequency table could not be encoded as JSON
    #[error("Cannot encode counts for {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be created or written
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordcountError {
    /// Short machine-readable code, used in log events
    pub fn code(&self) -> &'static str {
        match self {
            WordcountError::Config(_) => "CONFIG",
            WordcountError::FileAccess { .. } => "FILE_ACCESS",
            WordcountError::Serialization { .. } => "SERIALIZATION",
            WordcountError::Write { .. } => "WRITE",
        }
    }

    /// Whether this error aborts the whole batch
    #[cfg(test)]
    pub fn is_fatal(&self) -> bool {
        matches!(self, WordcountError::Config(_))
    }
}
