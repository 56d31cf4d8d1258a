//! VL003: Ingress must not use the HTTP-validated letsencrypt secret.

use super::{Rule, codes};
use crate::analyzer::valueslint::parser::ValuesDocument;
use crate::analyzer::valueslint::types::Finding;

const HTTP_VALIDATED_SECRET: &str = "letsencrypt-prod";

/// Rule: ingress TLS should use a DNS-validated letsencrypt secret.
///
/// Skipped entirely when the document has no ingress block.
pub struct IngressSecretRule;

impl Rule for IngressSecretRule {
    fn code(&self) -> &'static str {
        codes::INGRESS_SECRET
    }

    fn name(&self) -> &'static str {
        "ingress-letsencrypt-secret"
    }

    fn description(&self) -> &'static str {
        "Ingress should use a DNS-validated letsencrypt secret"
    }

    fn check(&self, doc: &ValuesDocument) -> Option<Finding> {
        let ingress = doc.ingress.as_ref()?;

        if ingress.letsencrypt_secret == HTTP_VALIDATED_SECRET {
            Some(Finding::warning(
                self.code(),
                format!(
                    "ingress letsencryptSecret must use a DNS-validated secret, not {}",
                    HTTP_VALIDATED_SECRET
                ),
            ))
        } else {
            Some(Finding::ok(self.code(), "Ingress"))
        }
    }
}
