//! Error types for bases-fixtures

use std::path::PathBuf;

use thiserror::Error;

use crate::base::Base;

/// Result type for fixture generation
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for fixture generation.
///
/// None of these are recoverable: any error aborts the whole run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown base identifier: '{0}'")]
    UnknownBase(String),

    #[error("Unknown test framework: '{0}'")]
    UnknownFramework(String),

    #[error("Invalid size space for {base}: {reason}")]
    InvalidSizeSpace { base: Base, reason: String },

    #[error("Failed to read config file {0}: {1}")]
    ConfigRead(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    ConfigParse(PathBuf, serde_json::Error),

    #[error("Invariant violation for {base} at length {length}: {reason}")]
    InvariantViolation {
        base: Base,
        length: usize,
        reason: String,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
