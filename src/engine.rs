use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use tracing::{debug, trace};

use crate::power::estimate_power;
use crate::rules::{builtin_rules, Rule};
use crate::types::{
    BuildSelection, CompatibilityReport, ConfigError, EvaluationTrace, Finding, Policy,
    RuleOutcome,
};

/// Builder for constructing an [`Engine`].
///
/// Starts from the built-in rules and the default [`Policy`]. Rules are run
/// in registration order; custom rules are appended after the built-ins.
///
/// # Example
///
/// ```
/// use rigcheck::{EngineBuilder, Finding, FindingKind, Slot};
///
/// let engine = EngineBuilder::new()
///     .rule("needs_storage", |selection, _policy| {
///         if selection.contains(Slot::Storage) {
///             Vec::new()
///         } else {
///             vec![Finding::warning(
///                 FindingKind::Custom("no_storage".into()),
///                 "no storage drive selected",
///                 [Slot::Storage],
///             )]
///         }
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.rule_names().len(), 10);
/// ```
#[derive(Debug)]
pub struct EngineBuilder {
    rules: Vec<Rule>,
    policy: Policy,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// A builder holding the built-in rules and the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
            policy: Policy::default(),
        }
    }

    /// A builder with no rules registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            policy: Policy::default(),
        }
    }

    /// Append a rule.
    #[must_use]
    pub fn rule(
        mut self,
        name: &str,
        check: impl Fn(&BuildSelection, &Policy) -> Vec<Finding> + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule::new(name, check));
        self
    }

    /// Drop every rule registered under `name`.
    #[must_use]
    pub fn without_rule(mut self, name: &str) -> Self {
        self.rules.retain(|r| r.name() != name);
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the rule list and policy and produce an immutable `Engine`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a rule name repeats, no rule is registered,
    /// or the policy is inconsistent.
    pub fn build(self) -> Result<Engine, ConfigError> {
        if self.rules.is_empty() {
            return Err(ConfigError::NoRules);
        }
        let mut seen = HashSet::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(ConfigError::DuplicateRule {
                    name: rule.name().to_owned(),
                });
            }
        }
        self.policy.validate()?;

        debug!(rules = self.rules.len(), "engine built");
        Ok(Engine {
            rules: self.rules,
            policy: self.policy,
        })
    }
}

/// An immutable rule list and policy. Thread-safe and designed to live behind `Arc`.
#[derive(Debug)]
pub struct Engine {
    rules: Vec<Rule>,
    policy: Policy,
}

impl Default for Engine {
    /// The built-in rules under the default policy.
    fn default() -> Self {
        Self {
            rules: builtin_rules(),
            policy: Policy::default(),
        }
    }
}

impl Engine {
    /// Shorthand for [`EngineBuilder::new()`].
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The process-wide default engine used by the crate-root functions.
    #[must_use]
    pub fn standard() -> &'static Engine {
        static STANDARD: OnceLock<Engine> = OnceLock::new();
        STANDARD.get_or_init(Engine::default)
    }

    /// Run every rule against `selection` and aggregate the findings.
    ///
    /// Findings keep rule order. Evaluation never fails: missing slots skip
    /// their rules and missing attributes skip their checks.
    pub fn evaluate(&self, selection: &BuildSelection) -> CompatibilityReport {
        let findings = self.rules.iter().flat_map(|rule| {
            let found = rule.check(selection, &self.policy);
            trace!(rule = rule.name(), findings = found.len(), "rule evaluated");
            found
        });
        let report = CompatibilityReport::from_findings(findings);
        debug!(
            slots = selection.len(),
            issues = report.issues().len(),
            warnings = report.warnings().len(),
            "selection evaluated"
        );
        report
    }

    /// Evaluate with per-rule diagnostics and timing.
    ///
    /// The contained report is identical to what [`evaluate()`](Self::evaluate)
    /// returns for the same selection.
    pub fn evaluate_detailed(&self, selection: &BuildSelection) -> EvaluationTrace {
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.rules.len());
        let mut findings = Vec::new();

        for rule in &self.rules {
            let found = rule.check(selection, &self.policy);
            trace!(rule = rule.name(), findings = found.len(), "rule evaluated");
            outcomes.push(RuleOutcome {
                rule: rule.name().to_owned(),
                findings: found.len(),
            });
            findings.extend(found);
        }

        let report = CompatibilityReport::from_findings(findings);
        let duration = start.elapsed();
        debug!(
            slots = selection.len(),
            issues = report.issues().len(),
            warnings = report.warnings().len(),
            ?duration,
            "selection evaluated"
        );
        EvaluationTrace::new(report, outcomes, duration)
    }

    /// Estimated draw under this engine's power profile.
    #[must_use]
    pub fn estimate_power(&self, selection: &BuildSelection) -> u32 {
        estimate_power(selection, &self.policy.power_profile)
    }

    /// Rule names in execution order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(Rule::name).collect()
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Engine({} rules: [{}])", self.rules.len(), self.rule_names().join(", "))
    }
}
