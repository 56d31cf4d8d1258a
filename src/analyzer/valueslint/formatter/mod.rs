//! Line-oriented reporter for lint findings.
//!
//! Output is streamed as rules are evaluated:
//!
//! ```text
//! Check values of file: helm/values/api.yml
//! ServiceType - OK
//! WARNING: memory requests and limits are identical (512Mi), review the resource configuration
//!
//! ```
//!
//! Fatal findings are not written here; they surface as the run's error.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::analyzer::valueslint::types::{Finding, Outcome};

/// Render a finding as a single plain-text line (no trailing newline).
pub fn format_finding(finding: &Finding) -> String {
    match finding.outcome {
        Outcome::Ok => format!("{} - OK", finding.message),
        Outcome::Warning => format!("WARNING: {}", finding.message),
        Outcome::Fatal => format!("FATAL: [{}] {}", finding.code, finding.message),
    }
}

/// Writes the per-file trace to any `Write` sink.
pub struct Reporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    /// Colorize OK and WARNING lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn file_header(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "Check values of file: {}", path.display())
    }

    pub fn finding(&mut self, finding: &Finding) -> io::Result<()> {
        if finding.is_fatal() {
            return Ok(());
        }

        let line = format_finding(finding);
        if !self.color {
            writeln!(self.out, "{}", line)?;
        } else if finding.outcome == Outcome::Warning {
            writeln!(self.out, "{}", line.yellow().bold())?;
        } else {
            writeln!(self.out, "{}", line.green())?;
        }
        self.out.flush()
    }

    pub fn file_separator(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_format_finding() {
        assert_eq!(format_finding(&Finding::ok("VL001", "ServiceType")), "ServiceType - OK");
        assert_eq!(
            format_finding(&Finding::warning("VL003", "use DNS")),
            "WARNING: use DNS"
        );
        assert_eq!(
            format_finding(&Finding::fatal("VL001", "switch to ClusterIP")),
            "FATAL: [VL001] switch to ClusterIP"
        );
    }

    #[test]
    fn test_reporter_trace() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.file_header(Path::new("helm/values/api.yml")).unwrap();
        reporter.finding(&Finding::ok("VL001", "ServiceType")).unwrap();
        reporter.finding(&Finding::warning("VL004", "low replicas")).unwrap();
        reporter.file_separator().unwrap();

        assert_eq!(
            output(reporter),
            "Check values of file: helm/values/api.yml\nServiceType - OK\nWARNING: low replicas\n\n"
        );
    }

    #[test]
    fn test_reporter_skips_fatal() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.finding(&Finding::fatal("VL002", "limits too low")).unwrap();
        assert!(output(reporter).is_empty());
    }
}
