//! VL004: Production workloads need at least two replicas.

use super::{Rule, codes};
use crate::analyzer::valueslint::parser::ValuesDocument;
use crate::analyzer::valueslint::types::Finding;

const MIN_PROD_REPLICAS: i64 = 2;

/// Rule: `replicaCount` below 2 in `prod` gets a warning.
///
/// Only evaluated when `environment` is exactly `prod`.
pub struct ProdReplicaCountRule;

impl Rule for ProdReplicaCountRule {
    fn code(&self) -> &'static str {
        codes::PROD_REPLICA_COUNT
    }

    fn name(&self) -> &'static str {
        "prod-replica-count"
    }

    fn description(&self) -> &'static str {
        "Production environment should run at least 2 replicas"
    }

    fn check(&self, doc: &ValuesDocument) -> Option<Finding> {
        if !doc.is_prod() {
            return None;
        }

        if doc.replica_count < MIN_PROD_REPLICAS {
            Some(Finding::warning(
                self.code(),
                format!(
                    "replicaCount = {} in prod, at least {} replicas are recommended",
                    doc.replica_count, MIN_PROD_REPLICAS
                ),
            ))
        } else {
            Some(Finding::ok(self.code(), "ReplicaCount"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::valueslint::types::Outcome;

    fn doc(environment: &str, replica_count: i64) -> ValuesDocument {
        ValuesDocument {
            environment: environment.to_string(),
            replica_count,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_replica_in_prod_warns() {
        let finding = ProdReplicaCountRule.check(&doc("prod", 1)).unwrap();
        assert_eq!(finding.outcome, Outcome::Warning);
        assert!(finding.message.contains("replicaCount = 1"));
    }

    #[test]
    fn test_enough_replicas_in_prod_is_ok() {
        let finding = ProdReplicaCountRule.check(&doc("prod", 3)).unwrap();
        assert_eq!(finding.outcome, Outcome::Ok);
    }

    #[test]
    fn test_non_prod_is_skipped() {
        assert!(ProdReplicaCountRule.check(&doc("dev", 1)).is_none());
        assert!(ProdReplicaCountRule.check(&doc("production", 0)).is_none());
    }
}
