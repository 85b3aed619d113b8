//! Built-in compatibility rules.
//!
//! Each rule is a plain function `(&BuildSelection, &Policy) -> Vec<Finding>`.
//! A rule that needs an unpopulated slot, or an attribute the part does not
//! list, returns no finding for that check.

use std::fmt;

use crate::power::estimate_power;
use crate::types::{
    BuildSelection, CaseFormFactor, CoolerKind, CpuCooler, Finding, FindingKind, FormFactor,
    Policy, Slot,
};

/// Signature shared by every rule.
pub type Check = dyn Fn(&BuildSelection, &Policy) -> Vec<Finding> + Send + Sync;

/// A named rule in an [`Engine`](crate::Engine)'s ordered rule list.
pub struct Rule {
    name: String,
    check: Box<Check>,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&BuildSelection, &Policy) -> Vec<Finding> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the rule against a selection.
    #[must_use]
    pub fn check(&self, selection: &BuildSelection, policy: &Policy) -> Vec<Finding> {
        (self.check)(selection, policy)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish_non_exhaustive()
    }
}

/// The built-in rules in execution order.
#[must_use]
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new("socket_match", socket_match),
        Rule::new("cpu_gpu_balance", cpu_gpu_balance),
        Rule::new("memory_compatibility", memory_compatibility),
        Rule::new("gpu_clearance", gpu_clearance),
        Rule::new("cooler_clearance", cooler_clearance),
        Rule::new("cooler_socket", cooler_socket),
        Rule::new("power_sufficiency", power_sufficiency),
        Rule::new("board_case_form_factor", board_case_form_factor),
        Rule::new("psu_case_form_factor", psu_case_form_factor),
    ]
}

/// Processor and motherboard must share a socket.
#[must_use]
pub fn socket_match(selection: &BuildSelection, _policy: &Policy) -> Vec<Finding> {
    let (Some(cpu), Some(board)) = (selection.processor(), selection.motherboard()) else {
        return Vec::new();
    };
    let (Some(cpu_socket), Some(board_socket)) = (&cpu.socket, &board.socket) else {
        return Vec::new();
    };
    if cpu_socket == board_socket {
        return Vec::new();
    }
    vec![Finding::critical(
        FindingKind::SocketMismatch,
        format!(
            "processor socket {cpu_socket} does not match motherboard socket {board_socket}"
        ),
        [Slot::Processor, Slot::Motherboard],
    )]
}

/// Flags processor/graphics pairings whose price tiers are far apart.
#[must_use]
pub fn cpu_gpu_balance(selection: &BuildSelection, policy: &Policy) -> Vec<Finding> {
    let (Some(cpu), Some(gpu)) = (selection.processor(), selection.graphics_card()) else {
        return Vec::new();
    };
    let (Some(cpu_score), Some(gpu_price)) = (cpu.performance_score, gpu.price) else {
        return Vec::new();
    };
    let bands = &policy.balance;
    let slots = [Slot::Processor, Slot::GraphicsCard];
    let mut findings = Vec::new();

    if gpu_price >= bands.flagship_gpu_price && cpu_score < bands.flagship_min_cpu_score {
        findings.push(Finding::warning(
            FindingKind::CpuBottleneck,
            format!(
                "processor score {cpu_score} may bottleneck a flagship graphics card; \
                 a score of at least {} is recommended",
                bands.flagship_min_cpu_score
            ),
            slots,
        ));
    } else if gpu_price >= bands.midrange_gpu_price
        && gpu_price < bands.flagship_gpu_price
        && cpu_score < bands.midrange_min_cpu_score
    {
        findings.push(Finding::warning(
            FindingKind::CpuBottleneck,
            format!(
                "processor score {cpu_score} may hold back this graphics card; \
                 a score of at least {} is recommended",
                bands.midrange_min_cpu_score
            ),
            slots,
        ));
    }

    if cpu_score > bands.high_end_cpu_score && gpu_price < bands.budget_gpu_price {
        findings.push(Finding::warning(
            FindingKind::GpuUnderpowered,
            format!(
                "a high-end processor (score {cpu_score}) is paired with a budget graphics card; \
                 gaming performance will be limited by the graphics card"
            ),
            slots,
        ));
    }
    findings
}

/// Memory type, capacity and speed against the motherboard.
#[must_use]
pub fn memory_compatibility(selection: &BuildSelection, policy: &Policy) -> Vec<Finding> {
    let (Some(memory), Some(board)) = (selection.memory(), selection.motherboard()) else {
        return Vec::new();
    };
    let slots = [Slot::Memory, Slot::Motherboard];
    let mut findings = Vec::new();

    if let (Some(kit_type), Some(board_type)) = (&memory.memory_type, &board.memory_type) {
        if kit_type != board_type {
            findings.push(Finding::critical(
                FindingKind::MemoryTypeMismatch,
                format!("{kit_type} memory is not supported by a {board_type} motherboard"),
                slots,
            ));
        }
    }
    if let (Some(capacity), Some(max)) = (memory.capacity_gb, board.max_memory_gb) {
        if capacity > max {
            findings.push(Finding::critical(
                FindingKind::MemoryCapacityExceeded,
                format!("{capacity} GB of memory exceeds the motherboard maximum of {max} GB"),
                slots,
            ));
        }
    }
    if let Some(speed) = memory.speed_mhz {
        if speed > policy.memory_speed_advisory_mhz {
            findings.push(Finding::warning(
                FindingKind::MemorySpeedAdvisory,
                format!(
                    "memory rated at {speed} MHz may need a manual firmware profile (XMP/EXPO) \
                     to run at full speed"
                ),
                slots,
            ));
        }
    }
    findings
}

/// Graphics card length against the case limit.
#[must_use]
pub fn gpu_clearance(selection: &BuildSelection, policy: &Policy) -> Vec<Finding> {
    let (Some(gpu), Some(case)) = (selection.graphics_card(), selection.case()) else {
        return Vec::new();
    };
    let (Some(length), Some(max)) = (gpu.length_mm, case.max_gpu_length_mm) else {
        return Vec::new();
    };
    let slots = [Slot::GraphicsCard, Slot::Case];

    if length > max {
        vec![Finding::critical(
            FindingKind::GpuClearance,
            format!("graphics card is {length} mm long but the case fits at most {max} mm"),
            slots,
        )]
    } else if f64::from(length) > f64::from(max) * policy.gpu_tight_fit_ratio {
        vec![Finding::warning(
            FindingKind::GpuTightFit,
            format!(
                "graphics card is {length} mm long against a {max} mm limit; \
                 cable and front fan clearance will be tight"
            ),
            slots,
        )]
    } else {
        Vec::new()
    }
}

/// Fan positions a radiator of the given size occupies.
#[must_use]
pub fn radiator_fan_slots(radiator_mm: u32) -> u32 {
    match radiator_mm {
        0..=239 => 1,
        240..=359 => 2,
        _ => 3,
    }
}

fn cooler_kind(cooler: &CpuCooler) -> Option<CoolerKind> {
    cooler.kind.or(match (cooler.radiator_mm, cooler.height_mm) {
        (Some(_), _) => Some(CoolerKind::AioLiquid),
        (None, Some(_)) => Some(CoolerKind::AirCooler),
        (None, None) => None,
    })
}

/// Air cooler height or radiator mounting against the case.
#[must_use]
pub fn cooler_clearance(selection: &BuildSelection, _policy: &Policy) -> Vec<Finding> {
    let (Some(cooler), Some(case)) = (selection.cpu_cooler(), selection.case()) else {
        return Vec::new();
    };
    let slots = [Slot::CpuCooler, Slot::Case];

    match cooler_kind(cooler) {
        Some(CoolerKind::AirCooler) => {
            let (Some(height), Some(max)) = (cooler.height_mm, case.max_cooler_height_mm) else {
                return Vec::new();
            };
            if height > max {
                return vec![Finding::critical(
                    FindingKind::CoolerClearance,
                    format!("cooler is {height} mm tall but the case fits at most {max} mm"),
                    slots,
                )];
            }
        }
        Some(CoolerKind::AioLiquid) => {
            let (Some(radiator), Some(available)) = (cooler.radiator_mm, case.mounting_slots())
            else {
                return Vec::new();
            };
            let required = radiator_fan_slots(radiator);
            if required > available {
                return vec![Finding::warning(
                    FindingKind::RadiatorMounting,
                    format!(
                        "a {radiator} mm radiator needs {required} fan positions but the case \
                         offers {available}; check the radiator support list"
                    ),
                    slots,
                )];
            }
        }
        None => {}
    }
    Vec::new()
}

/// Cooler mounting kit against the motherboard socket.
#[must_use]
pub fn cooler_socket(selection: &BuildSelection, _policy: &Policy) -> Vec<Finding> {
    let (Some(cooler), Some(board)) = (selection.cpu_cooler(), selection.motherboard()) else {
        return Vec::new();
    };
    let Some(socket) = &board.socket else {
        return Vec::new();
    };
    if cooler.supported_sockets.is_empty() || cooler.supported_sockets.contains(socket) {
        return Vec::new();
    }
    let supported: Vec<&str> = cooler.supported_sockets.iter().map(|s| s.as_str()).collect();
    vec![Finding::critical(
        FindingKind::CoolerSocketUnsupported,
        format!(
            "cooler supports {} but the motherboard uses {socket}",
            supported.join(", ")
        ),
        [Slot::CpuCooler, Slot::Motherboard],
    )]
}

/// Power supply capacity against the estimated draw.
///
/// At most one finding: insufficient, low headroom, or oversized.
#[must_use]
pub fn power_sufficiency(selection: &BuildSelection, policy: &Policy) -> Vec<Finding> {
    let (Some(psu), Some(_), Some(_)) = (
        selection.power_supply(),
        selection.processor(),
        selection.graphics_card(),
    ) else {
        return Vec::new();
    };
    let Some(capacity) = psu.wattage else {
        return Vec::new();
    };
    let estimate = estimate_power(selection, &policy.power_profile);
    let supplied = f64::from(capacity);
    let needed = f64::from(estimate);
    let headroom = &policy.headroom;
    let slots = [Slot::PowerSupply, Slot::Processor, Slot::GraphicsCard];

    if supplied < needed {
        vec![Finding::critical(
            FindingKind::InsufficientPower,
            format!("power supply provides {capacity} W but the build is estimated to draw {estimate} W"),
            slots,
        )]
    } else if supplied < needed * headroom.recommended_ratio {
        vec![Finding::warning(
            FindingKind::LowPowerHeadroom,
            format!(
                "power supply provides {capacity} W for an estimated {estimate} W; \
                 at least {:.0} W is recommended",
                (needed * headroom.recommended_ratio).ceil()
            ),
            slots,
        )]
    } else if supplied > needed * headroom.oversized_ratio {
        vec![Finding::warning(
            FindingKind::OversizedPowerSupply,
            format!(
                "power supply provides {capacity} W for an estimated {estimate} W; \
                 supplies run most efficiently at 50-80% load"
            ),
            slots,
        )]
    } else {
        Vec::new()
    }
}

/// Motherboard form factor against what the case can hold.
#[must_use]
pub fn board_case_form_factor(selection: &BuildSelection, _policy: &Policy) -> Vec<Finding> {
    let (Some(board), Some(case)) = (selection.motherboard(), selection.case()) else {
        return Vec::new();
    };
    let (Some(board_ff), Some(case_ff)) = (board.form_factor, case.form_factor) else {
        return Vec::new();
    };
    let slots = [Slot::Motherboard, Slot::Case];

    if board_ff <= case_ff.largest_board() {
        return Vec::new();
    }
    if board_ff == FormFactor::EAtx
        && case_ff.largest_board() == FormFactor::Atx
        && !case_ff.is_eatx_rated()
    {
        return vec![Finding::warning(
            FindingKind::BoardCaseUnverified,
            format!(
                "E-ATX motherboard in a case not rated for E-ATX ({case_ff}); \
                 verify the case's board support before buying"
            ),
            slots,
        )];
    }
    vec![Finding::critical(
        FindingKind::BoardCaseMismatch,
        format!("{board_ff} motherboard does not fit a {case_ff} case"),
        slots,
    )]
}

/// Full-size ATX supplies in Mini-ITX cases.
#[must_use]
pub fn psu_case_form_factor(selection: &BuildSelection, _policy: &Policy) -> Vec<Finding> {
    let (Some(psu), Some(case)) = (selection.power_supply(), selection.case()) else {
        return Vec::new();
    };
    match (psu.form_factor, case.form_factor) {
        (Some(psu_ff), Some(CaseFormFactor::MiniItx)) if !psu_ff.is_small() => {
            vec![Finding::warning(
                FindingKind::PsuCaseFit,
                format!(
                    "{psu_ff} power supply in a Mini-ITX case is usually too large; \
                     an SFX or SFX-L unit is typical"
                ),
                [Slot::PowerSupply, Slot::Case],
            )]
        }
        _ => Vec::new(),
    }
}
