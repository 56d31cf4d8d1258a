//! Memory quantity parsing.
//!
//! Only the two binary suffixes used by our values files are accepted:
//! `Mi` and `Gi`, matched case-sensitively, with an unsigned integer prefix.
//! Fractions, `Ki`/`Ti`, decimal units and bare byte counts are rejected.

use crate::error::MemoryQuantityError;

const MI: u64 = 1024 * 1024;
const GI: u64 = MI * 1024;

/// Parse a memory quantity string to bytes.
///
/// # Examples
/// - "128Mi" -> 134217728
/// - "1Gi" -> 1073741824
/// - "1024Ki" -> `UnsupportedFormat`
pub fn parse_memory_quantity(memory: &str) -> Result<u64, MemoryQuantityError> {
    let (digits, multiplier) = if let Some(digits) = memory.strip_suffix("Mi") {
        (digits, MI)
    } else if let Some(digits) = memory.strip_suffix("Gi") {
        (digits, GI)
    } else {
        return Err(MemoryQuantityError::UnsupportedFormat(memory.to_string()));
    };

    let value: u64 = digits
        .parse()
        .map_err(|source| MemoryQuantityError::InvalidNumber {
            value: memory.to_string(),
            source,
        })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| MemoryQuantityError::Overflow(memory.to_string()))
}
