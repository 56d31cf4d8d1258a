use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::valueslint::DEFAULT_VALUES_DIR;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned when no path is given on the command line
    pub values_dir: PathBuf,
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize OK and WARNING lines
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values_dir: PathBuf::from(DEFAULT_VALUES_DIR),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
