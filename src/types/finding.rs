use std::fmt;

use super::slot::Slot;

/// How serious a [`Finding`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// A hard incompatibility; the build cannot work as selected.
    Critical,
    /// An advisory; the build works but deserves a second look.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => f.write_str("critical"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// What a finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FindingKind {
    SocketMismatch,
    CpuBottleneck,
    GpuUnderpowered,
    MemoryTypeMismatch,
    MemoryCapacityExceeded,
    MemorySpeedAdvisory,
    GpuClearance,
    GpuTightFit,
    CoolerClearance,
    RadiatorMounting,
    CoolerSocketUnsupported,
    InsufficientPower,
    LowPowerHeadroom,
    OversizedPowerSupply,
    BoardCaseMismatch,
    BoardCaseUnverified,
    PsuCaseFit,
    /// Emitted by rules registered through [`EngineBuilder::rule`](crate::EngineBuilder::rule).
    Custom(String),
}

impl FindingKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FindingKind::SocketMismatch => "socket_mismatch",
            FindingKind::CpuBottleneck => "cpu_bottleneck",
            FindingKind::GpuUnderpowered => "gpu_underpowered",
            FindingKind::MemoryTypeMismatch => "memory_type_mismatch",
            FindingKind::MemoryCapacityExceeded => "memory_capacity_exceeded",
            FindingKind::MemorySpeedAdvisory => "memory_speed_advisory",
            FindingKind::GpuClearance => "gpu_clearance",
            FindingKind::GpuTightFit => "gpu_tight_fit",
            FindingKind::CoolerClearance => "cooler_clearance",
            FindingKind::RadiatorMounting => "radiator_mounting",
            FindingKind::CoolerSocketUnsupported => "cooler_socket_unsupported",
            FindingKind::InsufficientPower => "insufficient_power",
            FindingKind::LowPowerHeadroom => "low_power_headroom",
            FindingKind::OversizedPowerSupply => "oversized_power_supply",
            FindingKind::BoardCaseMismatch => "board_case_mismatch",
            FindingKind::BoardCaseUnverified => "board_case_unverified",
            FindingKind::PsuCaseFit => "psu_case_fit",
            FindingKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single compatibility observation produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Finding {
    kind: FindingKind,
    severity: Severity,
    message: String,
    involved_slots: Vec<Slot>,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        severity: Severity,
        message: impl Into<String>,
        involved_slots: impl Into<Vec<Slot>>,
    ) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            involved_slots: involved_slots.into(),
        }
    }

    pub fn critical(
        kind: FindingKind,
        message: impl Into<String>,
        involved_slots: impl Into<Vec<Slot>>,
    ) -> Self {
        Self::new(kind, Severity::Critical, message, involved_slots)
    }

    pub fn warning(
        kind: FindingKind,
        message: impl Into<String>,
        involved_slots: impl Into<Vec<Slot>>,
    ) -> Self {
        Self::new(kind, Severity::Warning, message, involved_slots)
    }

    #[must_use]
    pub fn kind(&self) -> &FindingKind {
        &self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn involved_slots(&self) -> &[Slot] {
        &self.involved_slots
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.kind, self.message)
    }
}
