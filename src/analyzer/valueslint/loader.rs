//! Discovery and loading of values files.
//!
//! Only the top level of the values directory is scanned, and only names
//! matching `*.yml` are picked up (`.yaml` files are not).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glob::Pattern;

use crate::analyzer::valueslint::parser::{ValuesDocument, parse_values};
use crate::error::{Result, ValuesLintError};

/// Default values directory, relative to the working directory.
pub const DEFAULT_VALUES_DIR: &str = "helm/values";

static VALUES_FILE_PATTERN: LazyLock<Pattern> = LazyLock::new(|| Pattern::new("*.yml").unwrap());

/// List values files in `dir`, sorted by file name.
pub fn discover_values_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let directory_error = |source| ValuesLintError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error)? {
        let entry = entry.map_err(directory_error)?;
        let name = entry.file_name();
        if let Some(name) = name.to_str() {
            if VALUES_FILE_PATTERN.matches(name) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    log::debug!("Found {} values files in {}", names.len(), dir.display());
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

/// Read and decode a single values file.
pub fn load_values_file(path: &Path) -> Result<ValuesDocument> {
    let content = fs::read_to_string(path).map_err(|source| ValuesLintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_values(&content).map_err(|source| ValuesLintError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
