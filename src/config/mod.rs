pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".values-lint.toml";

/// Get the global config file path (~/.values-lint.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.values-lint.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
///
/// An explicit path must exist. Otherwise the local config is checked first,
/// then the global one. A config file that exists but does not parse is an
/// error.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let local = local_config_path();
    if local.exists() {
        return read_config(&local);
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            return read_config(&global);
        }
    }

    log::debug!("No config file found, using defaults");
    Ok(types::Config::default())
}

fn read_config(path: &Path) -> Result<types::Config> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse configuration from TOML content.
pub fn parse_config(content: &str) -> Result<types::Config> {
    toml::from_str(content).map_err(|e| ConfigError::ParsingFailed(e.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = types::Config::default();
        assert_eq!(config.values_dir, PathBuf::from("helm/values"));
        assert!(config.output.color);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("values_dir = \"deploy/values\"\n").unwrap();
        assert_eq!(config.values_dir, PathBuf::from("deploy/values"));
        assert!(config.output.color);

        let config = parse_config("[output]\ncolor = false\n").unwrap();
        assert_eq!(config.values_dir, PathBuf::from("helm/values"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(parse_config("values_dir = [").is_err());
        assert!(parse_config("[output]\ncolor = \"yes\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lint.toml");
        fs::write(&path, "values_dir = \"charts/values\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.values_dir, PathBuf::from("charts/values"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_config(Some(temp_dir.path().join("nope.toml").as_path())).is_err());
    }
}
