//! Values file schema.
//!
//! Decoding is lenient about presence: unknown keys are ignored, a missing
//! `ingress` block stays `None`, and any other missing field takes its zero
//! value. Malformed YAML or a type mismatch is a decode error.

use serde::Deserialize;

/// A decoded values file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuesDocument {
    pub replica_count: i64,
    pub environment: String,
    pub service: ServiceValues,
    pub resources: ResourceValues,
    pub ingress: Option<IngressValues>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceValues {
    #[serde(rename = "type")]
    pub service_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResourceValues {
    pub requests: MemoryValues,
    pub limits: MemoryValues,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MemoryValues {
    pub memory: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngressValues {
    pub letsencrypt: String,
    pub letsencrypt_secret: String,
}

impl ValuesDocument {
    /// Whether this document targets the production environment.
    pub fn is_prod(&self) -> bool {
        self.environment == "prod"
    }
}

/// Decode values file content.
///
/// An empty or comment-only document decodes to the all-default document.
/// Scalars of any type in string fields are kept as their YAML text
/// (`letsencrypt: true` reads as `"true"`), and null reads as empty.
pub fn parse_values(content: &str) -> Result<ValuesDocument, serde_yaml::Error> {
    let blank = content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(ValuesDocument::default());
    }

    serde_yaml::from_str::<Option<ValuesDocument>>(content).map(Option::unwrap_or_default)
}
