//! Lint orchestration.
//!
//! Files are processed one at a time in name order. The first fatal
//! condition (unreadable file, bad YAML, fatal finding) ends the run;
//! nothing after it is loaded or evaluated.

use std::io::Write;
use std::path::Path;

use crate::analyzer::valueslint::formatter::{Reporter, format_finding};
use crate::analyzer::valueslint::loader::{discover_values_files, load_values_file};
use crate::analyzer::valueslint::parser::ValuesDocument;
use crate::analyzer::valueslint::rules::all_rules;
use crate::error::{Result, ValuesLintError};

/// Apply every rule to one document, reporting findings as they are produced.
///
/// Returns `RuleViolation` at the first fatal finding.
pub fn lint_document<W: Write>(
    doc: &ValuesDocument,
    file: &Path,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    for rule in all_rules() {
        let Some(finding) = rule.check(doc) else {
            log::trace!("{}: {} produced no finding", file.display(), rule.code());
            continue;
        };

        if finding.is_fatal() {
            return Err(ValuesLintError::RuleViolation {
                file: file.to_path_buf(),
                code: finding.code.to_string(),
                message: format_finding(&finding),
            });
        }
        reporter.finding(&finding)?;
    }
    Ok(())
}

/// Lint every values file in `dir`.
///
/// Returns the number of files checked when nothing fatal was found.
pub fn lint_directory<W: Write>(dir: &Path, reporter: &mut Reporter<W>) -> Result<usize> {
    let files = discover_values_files(dir)?;
    if files.is_empty() {
        log::info!("No values files found in {}", dir.display());
    }

    for file in &files {
        log::info!("Checking {}", file.display());
        reporter.file_header(file)?;
        let doc = load_values_file(file)?;
        lint_document(&doc, file, reporter)?;
        reporter.file_separator()?;
    }

    Ok(files.len())
}
