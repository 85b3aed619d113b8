#![allow(dead_code)]

use proptest::option;
use proptest::prelude::*;
use rigcheck::{
    BuildSelection, Case, CaseFormFactor, CoolerKind, CpuCooler, FormFactor, GraphicsCard, Memory,
    MemoryType, Motherboard, PowerSupply, Processor, PsuFormFactor, Socket, Storage,
};

// --- Fixed attribute pools ---
// Sockets and memory types are drawn from small pools so that matches and
// mismatches both show up often.

const SOCKETS: &[&str] = &["AM4", "AM5", "LGA1700", "LGA1851"];
const INTERFACES: &[&str] = &["PCIe 4.0 NVMe", "SATA III", "NVMe", "USB 3.2"];

pub fn arb_socket() -> impl Strategy<Value = Socket> {
    prop::sample::select(SOCKETS).prop_map(Socket::new)
}

pub fn arb_memory_type() -> impl Strategy<Value = MemoryType> {
    prop_oneof![
        Just(MemoryType::Ddr3),
        Just(MemoryType::Ddr4),
        Just(MemoryType::Ddr5),
    ]
}

pub fn arb_board_form_factor() -> impl Strategy<Value = FormFactor> {
    prop_oneof![
        Just(FormFactor::MiniItx),
        Just(FormFactor::MicroAtx),
        Just(FormFactor::Atx),
        Just(FormFactor::EAtx),
    ]
}

pub fn arb_case_form_factor() -> impl Strategy<Value = CaseFormFactor> {
    prop_oneof![
        Just(CaseFormFactor::MiniItx),
        Just(CaseFormFactor::MicroAtx),
        Just(CaseFormFactor::Atx),
        Just(CaseFormFactor::EAtx),
        Just(CaseFormFactor::FullTower),
        Just(CaseFormFactor::SuperTower),
    ]
}

pub fn arb_psu_form_factor() -> impl Strategy<Value = PsuFormFactor> {
    prop_oneof![
        Just(PsuFormFactor::Atx),
        Just(PsuFormFactor::Sfx),
        Just(PsuFormFactor::SfxL),
    ]
}

fn watts() -> impl Strategy<Value = f64> {
    0.0_f64..600.0
}

pub fn arb_processor() -> impl Strategy<Value = Processor> {
    (
        option::of(arb_socket()),
        option::of(watts()),
        option::of(watts()),
        option::of(1000_u32..60_000),
        option::of(2_u32..=64),
        option::of(1.0_f64..6.0),
    )
        .prop_map(|(socket, tdp_watts, power_watts, score, cores, boost)| Processor {
            socket,
            tdp_watts,
            power_watts,
            performance_score: score,
            core_count: cores,
            base_clock_ghz: None,
            boost_clock_ghz: boost,
        })
}

pub fn arb_motherboard() -> impl Strategy<Value = Motherboard> {
    (
        option::of(arb_socket()),
        option::of(arb_memory_type()),
        option::of(prop::sample::select(&[32_u32, 64, 128, 192, 256][..])),
        option::of(arb_board_form_factor()),
    )
        .prop_map(|(socket, memory_type, max_memory_gb, form_factor)| Motherboard {
            socket,
            memory_type,
            max_memory_gb,
            form_factor,
            power_watts: None,
        })
}

pub fn arb_graphics_card() -> impl Strategy<Value = GraphicsCard> {
    (
        option::of(150_u32..400),
        option::of(watts()),
        option::of(100.0_f64..2500.0),
        option::of(1000.0_f64..3000.0),
    )
        .prop_map(|(length_mm, tdp_watts, price, boost)| GraphicsCard {
            length_mm,
            tdp_watts,
            power_watts: None,
            price,
            boost_clock_mhz: boost,
        })
}

pub fn arb_memory() -> impl Strategy<Value = Memory> {
    (
        option::of(arb_memory_type()),
        option::of(prop::sample::select(&[8_u32, 16, 32, 64, 128, 256][..])),
        option::of(2133_u32..8400),
        option::of(1_u32..=8),
    )
        .prop_map(|(memory_type, capacity_gb, speed_mhz, module_count)| Memory {
            memory_type,
            capacity_gb,
            speed_mhz,
            module_count,
            watts_per_module: None,
        })
}

pub fn arb_storage() -> impl Strategy<Value = Storage> {
    option::of(prop::sample::select(INTERFACES)).prop_map(|interface| Storage {
        interface: interface.map(str::to_owned),
        power_watts: None,
    })
}

pub fn arb_power_supply() -> impl Strategy<Value = PowerSupply> {
    (option::of(200_u32..2000), option::of(arb_psu_form_factor())).prop_map(
        |(wattage, form_factor)| PowerSupply {
            wattage,
            form_factor,
        },
    )
}

pub fn arb_case() -> impl Strategy<Value = Case> {
    (
        option::of(arb_case_form_factor()),
        option::of(250_u32..450),
        option::of(120_u32..200),
        option::of(0_u32..4),
        option::of(0_u32..4),
        option::of(watts()),
    )
        .prop_map(|(form_factor, gpu, cooler, front, top, fan_watts)| Case {
            form_factor,
            max_gpu_length_mm: gpu,
            max_cooler_height_mm: cooler,
            front_fan_slots: front,
            top_fan_slots: top,
            rear_fan_slots: None,
            fan_watts,
        })
}

pub fn arb_cpu_cooler() -> impl Strategy<Value = CpuCooler> {
    (
        option::of(prop_oneof![Just(CoolerKind::AirCooler), Just(CoolerKind::AioLiquid)]),
        option::of(120_u32..190),
        option::of(prop::sample::select(&[120_u32, 240, 280, 360, 420][..])),
        prop::collection::vec(arb_socket(), 0..3),
    )
        .prop_map(|(kind, height_mm, radiator_mm, supported_sockets)| CpuCooler {
            kind,
            height_mm,
            radiator_mm,
            supported_sockets,
            power_watts: None,
        })
}

/// A selection where every core slot is independently present or absent.
pub fn arb_selection() -> impl Strategy<Value = BuildSelection> {
    (
        option::of(arb_processor()),
        option::of(arb_motherboard()),
        option::of(arb_graphics_card()),
        option::of(arb_memory()),
        option::of(arb_storage()),
        option::of(arb_power_supply()),
        option::of(arb_case()),
        option::of(arb_cpu_cooler()),
    )
        .prop_map(|(cpu, board, gpu, memory, storage, psu, case, cooler)| {
            let mut selection = BuildSelection::new();
            if let Some(part) = cpu {
                selection.insert(part);
            }
            if let Some(part) = board {
                selection.insert(part);
            }
            if let Some(part) = gpu {
                selection.insert(part);
            }
            if let Some(part) = memory {
                selection.insert(part);
            }
            if let Some(part) = storage {
                selection.insert(part);
            }
            if let Some(part) = psu {
                selection.insert(part);
            }
            if let Some(part) = case {
                selection.insert(part);
            }
            if let Some(part) = cooler {
                selection.insert(part);
            }
            selection
        })
}

/// A selection that always has a processor, graphics card and power supply
/// with known figures, so the power sufficiency rule always runs.
pub fn arb_powered_selection() -> impl Strategy<Value = BuildSelection> {
    (
        watts(),
        watts(),
        100_u32..2500,
        option::of(arb_motherboard()),
        option::of(arb_case()),
    )
        .prop_map(|(cpu_watts, gpu_watts, psu_watts, board, case)| {
            let mut selection = BuildSelection::new()
                .with(Processor::new().tdp(cpu_watts))
                .with(GraphicsCard::new().tdp(gpu_watts))
                .with(PowerSupply::new().wattage(psu_watts));
            if let Some(part) = board {
                selection.insert(part);
            }
            if let Some(part) = case {
                selection.insert(part);
            }
            selection
        })
}
