//! Compatibility and estimation engine for custom PC builds.
//!
//! A [`BuildSelection`] holds at most one part per [`Slot`]. The crate checks
//! it against an ordered list of compatibility rules, estimates its power
//! draw, and scores its performance:
//!
//! ```
//! use rigcheck::{BuildSelection, GraphicsCard, Motherboard, PowerSupply, Processor};
//!
//! let build = BuildSelection::new()
//!     .with(Processor::new().socket("AM5").tdp(120.0))
//!     .with(Motherboard::new().socket("LGA1700"))
//!     .with(GraphicsCard::new().tdp(285.0))
//!     .with(PowerSupply::new().wattage(750));
//!
//! let report = rigcheck::evaluate(&build);
//! assert!(!report.is_compatible());
//! assert_eq!(rigcheck::estimate_total_power(&build), 475);
//! ```
//!
//! Everything here is synchronous and side-effect free. Custom rule lists
//! and thresholds are assembled with [`EngineBuilder`].

mod engine;
pub mod parse;
pub mod power;
pub mod rules;
mod score;
#[cfg(feature = "snapshot")]
pub mod serial;
mod types;

pub use engine::{Engine, EngineBuilder};
pub use power::{estimate_system_power, estimate_total_power};
pub use rules::Rule;
pub use score::score_performance;
#[cfg(feature = "snapshot")]
pub use serial::{DeserializeError, Fingerprint, SerializeError};
pub use types::{
    Accessory, AccessoryKind, BalanceThresholds, BuildSelection, Case, CaseFormFactor,
    CompatibilityReport, Component, ConfigError, CoolerKind, CpuCooler, EvaluationTrace, Finding,
    FindingKind, FormFactor, GraphicsCard, HeadroomPolicy, Memory, MemoryType, Motherboard,
    PerformanceScore, Policy, PowerSupply, Processor, PsuFormFactor, ReportSummary, RuleOutcome,
    Severity, Slot, Socket, Storage, Tier,
};

/// Evaluate `selection` with the built-in rules and default policy.
#[must_use]
pub fn evaluate(selection: &BuildSelection) -> CompatibilityReport {
    Engine::standard().evaluate(selection)
}
