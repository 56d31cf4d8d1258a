//! VL002: Memory requests and limits sanity.

use super::{Rule, codes};
use crate::analyzer::valueslint::parser::{ValuesDocument, parse_memory_quantity};
use crate::analyzer::valueslint::types::Finding;

/// Rule: limits must not be below requests; identical values get a warning.
///
/// An unparseable quantity on either side is fatal.
pub struct MemoryRequestsLimitsRule;

impl Rule for MemoryRequestsLimitsRule {
    fn code(&self) -> &'static str {
        codes::MEMORY_REQUESTS_LIMITS
    }

    fn name(&self) -> &'static str {
        "memory-requests-limits"
    }

    fn description(&self) -> &'static str {
        "Memory limits must not be less than requests and should differ from them"
    }

    fn check(&self, doc: &ValuesDocument) -> Option<Finding> {
        let requests_raw = &doc.resources.requests.memory;
        let limits_raw = &doc.resources.limits.memory;

        let requests = match parse_memory_quantity(requests_raw) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Some(Finding::fatal(
                    self.code(),
                    format!("failed to parse resources.requests.memory: {}", e),
                ));
            }
        };
        let limits = match parse_memory_quantity(limits_raw) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Some(Finding::fatal(
                    self.code(),
                    format!("failed to parse resources.limits.memory: {}", e),
                ));
            }
        };

        let finding = if requests == limits {
            Finding::warning(
                self.code(),
                format!(
                    "memory requests and limits are identical ({}), review the resource configuration",
                    limits_raw
                ),
            )
        } else if limits < requests {
            Finding::fatal(
                self.code(),
                format!(
                    "memory limits ({}) cannot be less than requests ({})",
                    limits_raw, requests_raw
                ),
            )
        } else {
            Finding::ok(self.code(), "Resources")
        };
        Some(finding)
    }
}
