// Handler modules
pub mod check;
pub mod rules;

// Re-export all handler functions
pub use check::{handle_check, resolve_values_dir};
pub use rules::handle_rules;
