use std::fmt;

use super::finding::{Finding, Severity};

/// The outcome of evaluating a build: blocking issues and advisories.
///
/// Built only by partitioning findings on severity, so `issues` holds only
/// critical findings and `warnings` only warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct CompatibilityReport {
    issues: Vec<Finding>,
    warnings: Vec<Finding>,
}

impl CompatibilityReport {
    /// Partition findings by severity, keeping their relative order.
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        let (issues, warnings) = findings
            .into_iter()
            .partition(|finding| finding.severity() == Severity::Critical);
        Self { issues, warnings }
    }

    /// `true` when no critical issue was found.
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issues(&self) -> &[Finding] {
        &self.issues
    }

    #[must_use]
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// All findings, issues first.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.issues.iter().chain(&self.warnings)
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            is_compatible: self.is_compatible(),
            issue_count: self.issues.len(),
            warning_count: self.warnings.len(),
            critical_count: self
                .issues
                .iter()
                .filter(|finding| finding.is_critical())
                .count(),
        }
    }
}

impl fmt::Display for CompatibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for finding in self.findings() {
            writeln!(f, "  {finding}")?;
        }
        Ok(())
    }
}

/// Counts by severity for a [`CompatibilityReport`].
///
/// `critical_count` equals `issue_count` today; it is kept separate for graded
/// issue severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct ReportSummary {
    pub is_compatible: bool,
    pub issue_count: usize,
    pub warning_count: usize,
    pub critical_count: usize,
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} issue(s), {} warning(s)",
            if self.is_compatible {
                "compatible"
            } else {
                "incompatible"
            },
            self.issue_count,
            self.warning_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FindingKind, Slot};

    fn sample_findings() -> Vec<Finding> {
        vec![
            Finding::warning(FindingKind::GpuTightFit, "tight", [Slot::GraphicsCard]),
            Finding::critical(FindingKind::SocketMismatch, "socket", [Slot::Processor]),
            Finding::warning(FindingKind::PsuCaseFit, "psu", [Slot::PowerSupply]),
        ]
    }

    #[test]
    fn partition_by_severity() {
        let report = CompatibilityReport::from_findings(sample_findings());
        assert!(!report.is_compatible());
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.warnings().len(), 2);
        assert!(report.issues().iter().all(Finding::is_critical));
        assert!(report.warnings().iter().all(|f| !f.is_critical()));
        assert_eq!(report.warnings()[0].kind(), &FindingKind::GpuTightFit);
    }

    #[test]
    fn empty_report_is_compatible() {
        let report = CompatibilityReport::from_findings(Vec::new());
        assert!(report.is_compatible());
        assert_eq!(report, CompatibilityReport::default());
    }

    #[test]
    fn summary_counts() {
        let summary = CompatibilityReport::from_findings(sample_findings()).summary();
        assert_eq!(
            summary,
            ReportSummary {
                is_compatible: false,
                issue_count: 1,
                warning_count: 2,
                critical_count: 1,
            }
        );
    }

    #[test]
    fn display_lists_findings() {
        let report = CompatibilityReport::from_findings(sample_findings());
        let s = report.to_string();
        assert!(s.starts_with("incompatible: 1 issue(s), 2 warning(s)"));
        assert!(s.contains("[critical] socket_mismatch: socket"));
        assert!(s.contains("[warning] psu_case_fit: psu"));
    }
}
