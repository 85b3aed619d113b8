mod attributes;
mod component;
mod error;
mod evaluation_trace;
mod finding;
mod performance;
mod policy;
mod report;
mod selection;
mod slot;

pub use attributes::{CaseFormFactor, CoolerKind, FormFactor, MemoryType, PsuFormFactor, Socket};
pub use component::{
    Accessory, AccessoryKind, Case, Component, CpuCooler, GraphicsCard, Memory, Motherboard,
    PowerSupply, Processor, Storage,
};
pub use error::ConfigError;
pub use evaluation_trace::{EvaluationTrace, RuleOutcome};
pub use finding::{Finding, FindingKind, Severity};
pub use performance::{PerformanceScore, Tier};
pub use policy::{BalanceThresholds, HeadroomPolicy, Policy};
pub use report::{CompatibilityReport, ReportSummary};
pub use selection::BuildSelection;
pub use slot::Slot;
