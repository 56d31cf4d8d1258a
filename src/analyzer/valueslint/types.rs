//! Core types for the values linter.
//!
//! - `Outcome` - result class of one rule evaluation
//! - `Finding` - a single reported rule result

/// Outcome of evaluating a rule.
///
/// Ordered from least to most severe: `Ok < Warning < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// The check passed.
    Ok,
    /// Worth reviewing; the run continues.
    Warning,
    /// Aborts the whole run.
    Fatal,
}

/// A rule result reported for one values file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Code of the rule that produced this finding (e.g. "VL001").
    pub code: &'static str,
    pub outcome: Outcome,
    /// For `Ok` findings this is the checked subject ("ServiceType"),
    /// otherwise a human-readable explanation.
    pub message: String,
}

impl Finding {
    pub fn ok(code: &'static str, subject: impl Into<String>) -> Self {
        Self {
            code,
            outcome: Outcome::Ok,
            message: subject.into(),
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            outcome: Outcome::Warning,
            message: message.into(),
        }
    }

    pub fn fatal(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            outcome: Outcome::Fatal,
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.outcome == Outcome::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_ordering() {
        assert!(Outcome::Fatal > Outcome::Warning);
        assert!(Outcome::Warning > Outcome::Ok);
    }

    #[test]
    fn test_finding_constructors() {
        assert!(Finding::fatal("VL001", "boom").is_fatal());
        assert!(!Finding::warning("VL002", "hmm").is_fatal());
        assert_eq!(Finding::ok("VL003", "Ingress").outcome, Outcome::Ok);
    }
}
