//! Valueslint: Helm values best-practice gate.
//!
//! Checks every `*.yml` file of a values directory against a fixed set of
//! operational rules and stops at the first fatal problem.
//!
//! # Example
//!
//! ```rust,no_run
//! use values_lint::analyzer::valueslint::{Reporter, lint_directory};
//! use std::path::Path;
//!
//! # fn main() -> values_lint::Result<()> {
//! let mut reporter = Reporter::new(std::io::stdout());
//! let checked = lint_directory(Path::new("helm/values"), &mut reporter)?;
//! eprintln!("{} files passed", checked);
//! # Ok(())
//! # }
//! ```
//!
//! # Rules
//!
//! | Code | Outcome on violation | Description |
//! |------|----------------------|-------------|
//! | VL001 | fatal | `service.type` is NodePort |
//! | VL002 | fatal / warning | memory limits below / equal to requests |
//! | VL003 | warning | ingress uses `letsencrypt-prod` secret |
//! | VL004 | warning | fewer than 2 replicas in `prod` |

pub mod formatter;
pub mod lint;
pub mod loader;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use formatter::{Reporter, format_finding};
pub use lint::{lint_directory, lint_document};
pub use loader::{DEFAULT_VALUES_DIR, discover_values_files, load_values_file};
pub use parser::{ValuesDocument, parse_memory_quantity, parse_values};
pub use rules::{Rule, all_rules, get_rule};
pub use types::{Finding, Outcome};
