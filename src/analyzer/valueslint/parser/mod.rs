//! Parsers for values files and the quantities inside them.

pub mod memory;
pub mod values;

pub use memory::parse_memory_quantity;
pub use values::{ValuesDocument, parse_values};
