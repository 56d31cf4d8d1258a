//! VL001: Service type must not be NodePort.

use super::{Rule, codes};
use crate::analyzer::valueslint::parser::ValuesDocument;
use crate::analyzer::valueslint::types::Finding;

/// Rule: NodePort services expose every node; ClusterIP is required.
///
/// Types other than `NodePort` and `ClusterIP` (including an empty value)
/// produce no finding.
pub struct ServiceTypeRule;

impl Rule for ServiceTypeRule {
    fn code(&self) -> &'static str {
        codes::SERVICE_TYPE
    }

    fn name(&self) -> &'static str {
        "service-type"
    }

    fn description(&self) -> &'static str {
        "Service type must be ClusterIP, NodePort is not allowed"
    }

    fn check(&self, doc: &ValuesDocument) -> Option<Finding> {
        match doc.service.service_type.as_str() {
            "NodePort" => Some(Finding::fatal(
                self.code(),
                "service type NodePort is not allowed, switch to ClusterIP",
            )),
            "ClusterIP" => Some(Finding::ok(self.code(), "ServiceType")),
            _ => None,
        }
    }
}
