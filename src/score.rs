//! Weighted performance scoring.
//!
//! Each populated slot earns up to its weight in points; the sum is scaled
//! against the weights of populated slots only, so a partial build is scored
//! on what it has.

use tracing::trace;

use crate::types::{
    BuildSelection, CpuCooler, GraphicsCard, Memory, PerformanceScore, Processor, Storage,
};

pub const PROCESSOR_WEIGHT: f64 = 30.0;
pub const GRAPHICS_WEIGHT: f64 = 40.0;
pub const MEMORY_WEIGHT: f64 = 15.0;
pub const STORAGE_WEIGHT: f64 = 10.0;
pub const COOLING_WEIGHT: f64 = 5.0;

/// Storage without an NVMe-class interface earns half marks.
const SLOW_STORAGE_POINTS: f64 = 5.0;
/// Module count assumed for a kit that does not list one.
const DEFAULT_MODULE_COUNT: u32 = 2;

fn processor_points(cpu: &Processor) -> f64 {
    let clock = cpu.boost_clock_ghz.or(cpu.base_clock_ghz).unwrap_or(0.0);
    let cores = f64::from(cpu.core_count.unwrap_or(0));
    (clock * cores / 10.0).min(PROCESSOR_WEIGHT)
}

fn graphics_points(gpu: &GraphicsCard) -> f64 {
    (gpu.boost_clock_mhz.unwrap_or(0.0) / 50.0).min(GRAPHICS_WEIGHT)
}

fn memory_points(memory: &Memory) -> f64 {
    let speed = f64::from(memory.speed_mhz.unwrap_or(0));
    let modules = f64::from(memory.module_count.unwrap_or(DEFAULT_MODULE_COUNT));
    ((speed / 200.0) * modules / 10.0).min(MEMORY_WEIGHT)
}

fn storage_points(drive: &Storage) -> f64 {
    if drive.is_nvme_class() {
        STORAGE_WEIGHT
    } else {
        SLOW_STORAGE_POINTS
    }
}

fn cooling_points(_cooler: &CpuCooler) -> f64 {
    COOLING_WEIGHT
}

/// Score a build from 0 to 100 and place it in a [`Tier`](crate::Tier).
///
/// A selection with no scored slot scores 0 (Entry-Level).
pub fn score_performance(selection: &BuildSelection) -> PerformanceScore {
    let parts = [
        selection.processor().map(|p| (processor_points(p), PROCESSOR_WEIGHT)),
        selection.graphics_card().map(|g| (graphics_points(g), GRAPHICS_WEIGHT)),
        selection.memory().map(|m| (memory_points(m), MEMORY_WEIGHT)),
        selection.storage().map(|s| (storage_points(s), STORAGE_WEIGHT)),
        selection.cpu_cooler().map(|c| (cooling_points(c), COOLING_WEIGHT)),
    ];

    let (points, max_points) = parts
        .into_iter()
        .flatten()
        .fold((0.0, 0.0), |(points, max), (p, w)| (points + p.max(0.0), max + w));

    let percentage = if max_points > 0.0 {
        points / max_points * 100.0
    } else {
        0.0
    };
    trace!(points, max_points, percentage, "performance score");
    PerformanceScore::new(percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Case, Tier};

    #[test]
    fn empty_selection_scores_zero() {
        let score = score_performance(&BuildSelection::new());
        assert_eq!(score.score(), 0.0);
        assert_eq!(score.tier(), Tier::EntryLevel);
    }

    #[test]
    fn unscored_slots_do_not_count() {
        let score = score_performance(&BuildSelection::new().with(Case::new()));
        assert_eq!(score.score(), 0.0);
    }

    #[test]
    fn cpu_and_gpu_only_renormalized_over_seventy() {
        // 5.0 GHz x 16 cores / 10 = 8 points, 2000 MHz / 50 = 40 points.
        let selection = BuildSelection::new()
            .with(Processor::new().cores(16).boost_clock(5.0))
            .with(GraphicsCard::new().boost_clock(2000.0));
        let score = score_performance(&selection);
        let expected = 48.0 / 70.0 * 100.0;
        assert!((score.score() - expected).abs() < 1e-9);
        assert_eq!(score.tier(), Tier::MidRange);
    }

    #[test]
    fn processor_caps_at_weight() {
        let cpu = Processor::new().cores(64).boost_clock(5.5);
        assert_eq!(processor_points(&cpu), PROCESSOR_WEIGHT);
    }

    #[test]
    fn base_clock_used_without_boost() {
        let cpu = Processor::new().cores(10).base_clock(3.0);
        assert!((processor_points(&cpu) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn memory_uses_default_module_count() {
        // 6000 / 200 = 30, x 2 modules / 10 = 6.
        assert!((memory_points(&Memory::new().speed(6000)) - 6.0).abs() < 1e-9);
        assert_eq!(memory_points(&Memory::new().speed(8000).modules(8)), MEMORY_WEIGHT);
    }

    #[test]
    fn storage_interface_points() {
        assert_eq!(storage_points(&Storage::new().interface("NVMe PCIe 4.0")), 10.0);
        assert_eq!(storage_points(&Storage::new().interface("SATA")), 5.0);
        assert_eq!(storage_points(&Storage::new()), 5.0);
    }

    #[test]
    fn cooler_alone_is_full_marks() {
        let score = score_performance(&BuildSelection::new().with(CpuCooler::liquid(360)));
        assert_eq!(score.score(), 100.0);
        assert_eq!(score.tier(), Tier::Extreme);
    }

    #[test]
    fn present_slot_without_attributes_scores_zero_but_counts() {
        let selection = BuildSelection::new()
            .with(GraphicsCard::new())
            .with(CpuCooler::air(150));
        // 5 of 45 points.
        let score = score_performance(&selection);
        assert!((score.score() - 5.0 / 45.0 * 100.0).abs() < 1e-9);
    }
}
