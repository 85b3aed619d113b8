use std::fmt;
use std::time::Duration;

use super::report::CompatibilityReport;

/// How many findings one rule produced during an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: String,
    pub findings: usize,
}

/// Detailed evaluation result returned by
/// [`Engine::evaluate_detailed()`](crate::Engine::evaluate_detailed).
///
/// Contains the report, each rule's finding count in execution order, and
/// the wall-clock duration of the evaluation. The report itself carries no
/// timing and is identical to what [`Engine::evaluate()`](crate::Engine::evaluate)
/// returns.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationTrace {
    report: CompatibilityReport,
    outcomes: Vec<RuleOutcome>,
    duration: Duration,
}

impl EvaluationTrace {
    pub(crate) fn new(
        report: CompatibilityReport,
        outcomes: Vec<RuleOutcome>,
        duration: Duration,
    ) -> Self {
        Self {
            report,
            outcomes,
            duration,
        }
    }

    pub fn report(&self) -> &CompatibilityReport {
        &self.report
    }

    pub fn into_report(self) -> CompatibilityReport {
        self.report
    }

    /// Every rule in execution order with its finding count.
    #[must_use]
    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    /// Names of rules that produced at least one finding, in execution order.
    #[must_use]
    pub fn fired(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.findings > 0)
            .map(|outcome| outcome.rule.as_str())
            .collect()
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report.summary())?;
        write!(f, ", fired: [{}]", self.fired().join(", "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
