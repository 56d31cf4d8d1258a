//! # values-lint
//!
//! A command-line gate that validates Helm values files against a small set
//! of operational best-practice rules before deployment.
//!
//! ## Rules
//!
//! - **Service type**: `NodePort` is rejected, `ClusterIP` is expected
//! - **Resources**: memory limits must not be below requests
//! - **Ingress**: TLS should use a DNS-validated letsencrypt secret
//! - **Replicas**: production needs at least two replicas
//!
//! The run stops at the first fatal problem; warnings are reported and the
//! run continues.
//!
//! ## Example
//!
//! ```rust,no_run
//! use values_lint::analyzer::valueslint::{Reporter, lint_directory};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reporter = Reporter::new(std::io::stdout());
//! lint_directory(Path::new("helm/values"), &mut reporter)?;
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::valueslint::{ValuesDocument, lint_directory, lint_document};
pub use error::{Result, ValuesLintError};
pub use handlers::*;
use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands, no_color: bool, config: &Config) -> Result<()> {
    match command {
        Commands::Check { path } => handlers::handle_check(path, no_color, config),
        Commands::Rules { code } => handlers::handle_rules(code),
    }
}
