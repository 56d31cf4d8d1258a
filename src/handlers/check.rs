//! Handler for the `check` command.
//!
//! Validates every values file of a directory and streams the trace to
//! stdout. Errors are returned untouched so `main` makes the exit decision.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use crate::analyzer::valueslint::{Reporter, lint_directory};
use crate::config::types::Config;
use crate::error::Result;

/// Pick the values directory: command line first, then configuration.
pub fn resolve_values_dir(path: Option<PathBuf>, config: &Config) -> PathBuf {
    path.unwrap_or_else(|| config.values_dir.clone())
}

pub fn handle_check(path: Option<PathBuf>, no_color: bool, config: &Config) -> Result<()> {
    let dir = resolve_values_dir(path, config);
    let stdout = io::stdout();
    let color = config.output.color && !no_color && stdout.is_terminal();

    let mut reporter = Reporter::new(stdout.lock()).with_color(color);
    let checked = lint_directory(&dir, &mut reporter)?;

    log::info!("{} values files passed in {}", checked, dir.display());
    Ok(())
}
