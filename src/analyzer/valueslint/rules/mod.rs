//! Rule system for the values linter.
//!
//! Rules run in registry order and each yields at most one finding. A rule
//! that returns `None` emits nothing for the document.
//!
//! | Code | Rule |
//! |------|------|
//! | VL001 | Service type must not be NodePort |
//! | VL002 | Memory requests/limits sanity |
//! | VL003 | Ingress letsencrypt secret policy |
//! | VL004 | Production replica count |

mod vl001;
mod vl002;
mod vl003;
mod vl004;

pub use vl001::ServiceTypeRule;
pub use vl002::MemoryRequestsLimitsRule;
pub use vl003::IngressSecretRule;
pub use vl004::ProdReplicaCountRule;

use crate::analyzer::valueslint::parser::ValuesDocument;
use crate::analyzer::valueslint::types::Finding;

/// Rule code constants.
pub mod codes {
    pub const SERVICE_TYPE: &str = "VL001";
    pub const MEMORY_REQUESTS_LIMITS: &str = "VL002";
    pub const INGRESS_SECRET: &str = "VL003";
    pub const PROD_REPLICA_COUNT: &str = "VL004";
}

/// A check applied to a single values document.
pub trait Rule: Send + Sync {
    /// Get the rule code (e.g., "VL001").
    fn code(&self) -> &'static str;

    /// Get the rule name.
    fn name(&self) -> &'static str;

    /// Get the rule description.
    fn description(&self) -> &'static str;

    /// Evaluate the rule, returning `None` when it has nothing to report.
    fn check(&self, doc: &ValuesDocument) -> Option<Finding>;
}

/// All rules in evaluation order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ServiceTypeRule),
        Box::new(MemoryRequestsLimitsRule),
        Box::new(IngressSecretRule),
        Box::new(ProdReplicaCountRule),
    ]
}

/// Get a rule by code.
pub fn get_rule(code: &str) -> Option<Box<dyn Rule>> {
    all_rules().into_iter().find(|r| r.code() == code)
}
