//! Power draw estimation.
//!
//! Every populated core slot contributes its reported figure or a fallback
//! from [`PowerDefaults`]. The motherboard default is counted even when no
//! board is selected. Two [`PowerProfile`] presets share that table and
//! differ only in what a case's fans are assumed to draw when the case lists
//! nothing.

use tracing::trace;

use crate::types::{BuildSelection, Component, Slot};

/// Fallback figures for parts that do not list their own draw.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerDefaults {
    pub motherboard_watts: f64,
    pub memory_module_count: u32,
    pub memory_watts_per_module: f64,
    pub storage_watts: f64,
    pub cooler_watts: f64,
    /// USB devices and fan/RGB controllers; added to every estimate.
    pub system_overhead_watts: f64,
}

impl PowerDefaults {
    pub const STANDARD: PowerDefaults = PowerDefaults {
        motherboard_watts: 50.0,
        memory_module_count: 2,
        memory_watts_per_module: 4.0,
        storage_watts: 5.0,
        cooler_watts: 10.0,
        system_overhead_watts: 20.0,
    };
}

impl Default for PowerDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A named estimator preset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerProfile {
    pub defaults: PowerDefaults,
    /// Assumed case fan and lighting draw when the case lists none.
    pub case_fan_watts: f64,
}

impl PowerProfile {
    /// Preset behind [`estimate_total_power`] and the power sufficiency rule.
    pub const SUFFICIENCY: PowerProfile = PowerProfile {
        defaults: PowerDefaults::STANDARD,
        case_fan_watts: 30.0,
    };

    /// Preset behind [`estimate_system_power`], the figure shown as the
    /// build's running total.
    pub const SYSTEM_TOTAL: PowerProfile = PowerProfile {
        defaults: PowerDefaults::STANDARD,
        case_fan_watts: 20.0,
    };
}

impl Default for PowerProfile {
    fn default() -> Self {
        Self::SUFFICIENCY
    }
}

/// Where a contribution's figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSource {
    /// The part's own TDP or consumption field.
    Reported,
    /// The generic consumption field, used because no TDP was listed.
    Fallback,
    /// A value from the defaults table (or zero for a CPU/GPU listing nothing).
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerContribution {
    pub slot: Slot,
    pub watts: f64,
    pub source: PowerSource,
}

/// The per-slot contributions behind an estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerBreakdown {
    contributions: Vec<PowerContribution>,
    overhead_watts: f64,
}

impl PowerBreakdown {
    #[must_use]
    pub fn contributions(&self) -> &[PowerContribution] {
        &self.contributions
    }

    #[must_use]
    pub fn overhead_watts(&self) -> f64 {
        self.overhead_watts
    }

    /// Contribution of one slot, if it draws power. An empty motherboard slot
    /// still reports its default.
    #[must_use]
    pub fn watts_for(&self, slot: Slot) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.slot == slot)
            .map(|c| c.watts)
    }

    /// Sum of all contributions and the overhead, rounded to the nearest watt.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn total_watts(&self) -> u32 {
        let raw: f64 =
            self.contributions.iter().map(|c| c.watts).sum::<f64>() + self.overhead_watts;
        raw.round().clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

fn reported_or_fallback(
    primary: Option<f64>,
    fallback: Option<f64>,
) -> (f64, PowerSource) {
    match (primary, fallback) {
        (Some(watts), _) => (watts, PowerSource::Reported),
        (None, Some(watts)) => (watts, PowerSource::Fallback),
        (None, None) => (0.0, PowerSource::Default),
    }
}

fn reported_or_default(reported: Option<f64>, default: f64) -> (f64, PowerSource) {
    match reported {
        Some(watts) => (watts, PowerSource::Reported),
        None => (default, PowerSource::Default),
    }
}

/// Per-slot contributions under `profile`.
#[must_use]
pub fn power_breakdown(selection: &BuildSelection, profile: &PowerProfile) -> PowerBreakdown {
    let defaults = &profile.defaults;
    let mut contributions = Vec::with_capacity(selection.len() + 1);

    for (slot, component) in selection.iter().filter(|(slot, _)| slot.is_core()) {
        let (watts, source) = match component {
            Component::Processor(cpu) => reported_or_fallback(cpu.tdp_watts, cpu.power_watts),
            Component::GraphicsCard(gpu) => {
                reported_or_fallback(gpu.tdp_watts, gpu.power_watts)
            }
            Component::Motherboard(board) => {
                reported_or_default(board.power_watts, defaults.motherboard_watts)
            }
            Component::Memory(memory) => {
                let modules = memory.module_count.unwrap_or(defaults.memory_module_count);
                let per_module = memory
                    .watts_per_module
                    .unwrap_or(defaults.memory_watts_per_module);
                let source = if memory.module_count.is_some() && memory.watts_per_module.is_some()
                {
                    PowerSource::Reported
                } else {
                    PowerSource::Default
                };
                (f64::from(modules) * per_module, source)
            }
            Component::Storage(drive) => {
                reported_or_default(drive.power_watts, defaults.storage_watts)
            }
            Component::CpuCooler(cooler) => {
                reported_or_default(cooler.power_watts, defaults.cooler_watts)
            }
            Component::Case(case) => reported_or_default(case.fan_watts, profile.case_fan_watts),
            Component::PowerSupply(_) | Component::Accessory(_) => continue,
        };
        trace!(%slot, watts, ?source, "power contribution");
        contributions.push(PowerContribution {
            slot,
            watts,
            source,
        });
    }

    if !selection.contains(Slot::Motherboard) {
        let watts = defaults.motherboard_watts;
        trace!(slot = %Slot::Motherboard, watts, "unselected board default");
        contributions.push(PowerContribution {
            slot: Slot::Motherboard,
            watts,
            source: PowerSource::Default,
        });
    }

    PowerBreakdown {
        contributions,
        overhead_watts: defaults.system_overhead_watts,
    }
}

/// Estimated draw in whole watts under `profile`.
#[must_use]
pub fn estimate_power(selection: &BuildSelection, profile: &PowerProfile) -> u32 {
    power_breakdown(selection, profile).total_watts()
}

/// Estimated draw used to judge power supply sufficiency.
#[must_use]
pub fn estimate_total_power(selection: &BuildSelection) -> u32 {
    estimate_power(selection, &PowerProfile::SUFFICIENCY)
}

/// Estimated draw shown as a build's running total.
#[must_use]
pub fn estimate_system_power(selection: &BuildSelection) -> u32 {
    estimate_power(selection, &PowerProfile::SYSTEM_TOTAL)
}
