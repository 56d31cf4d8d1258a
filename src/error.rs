//! Error types for values-lint.
//!
//! Every failure is fatal to the whole run: errors propagate with `?` up to
//! `main`, which prints the diagnostic and picks the exit status.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a validation run.
#[derive(Debug, Error)]
pub enum ValuesLintError {
    /// The values directory could not be listed.
    #[error("Cannot list directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched values file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A values file is not valid YAML for the expected schema.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A rule produced a fatal finding. `message` is the rendered finding.
    #[error("{}: {message}", .file.display())]
    RuleViolation {
        file: PathBuf,
        code: String,
        message: String,
    },

    #[error("Unknown rule code: {0}")]
    UnknownRule(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the trace failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config parsing failed: {0}")]
    ParsingFailed(String),
}

/// Errors from parsing a memory quantity such as `512Mi`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryQuantityError {
    /// Suffix is missing or not one of `Mi` / `Gi`.
    #[error("unsupported memory format {0:?} (expected <n>Mi or <n>Gi)")]
    UnsupportedFormat(String),

    /// The numeric prefix is not a base-10 unsigned integer.
    #[error("invalid number in memory quantity {value:?}: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The byte count does not fit in 64 bits.
    #[error("memory quantity {0:?} is too large")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, ValuesLintError>;
