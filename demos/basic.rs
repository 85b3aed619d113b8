use rigcheck::{
    BuildSelection, Case, CaseFormFactor, CpuCooler, FormFactor, GraphicsCard, Memory,
    MemoryType, Motherboard, PowerSupply, Processor, Storage,
};

fn main() {
    // A mid-range build with a socket mistake and a small power supply.
    let build = BuildSelection::new()
        .with(
            Processor::new()
                .socket("AM5")
                .tdp(120.0)
                .performance_score(35_000)
                .cores(8)
                .boost_clock(5.0),
        )
        .with(
            Motherboard::new()
                .socket("LGA1700")
                .memory_type(MemoryType::Ddr5)
                .max_memory(128)
                .form_factor(FormFactor::Atx),
        )
        .with(GraphicsCard::new().length(304).tdp(285.0).price(799.0).boost_clock(2610.0))
        .with(Memory::new().memory_type(MemoryType::Ddr5).capacity(32).speed(6000))
        .with(Storage::new().interface("PCIe 4.0 NVMe"))
        .with(PowerSupply::new().wattage(550))
        .with(
            Case::new()
                .form_factor(CaseFormFactor::Atx)
                .max_gpu_length(400)
                .max_cooler_height(165)
                .fan_slots(3, 2, 1),
        )
        .with(CpuCooler::air(155).supports("AM5"));

    let report = rigcheck::evaluate(&build);
    println!("{report}");

    println!("Estimated draw: {} W", rigcheck::estimate_total_power(&build));
    println!("Running total:  {} W", rigcheck::estimate_system_power(&build));
    println!("Performance:    {}", rigcheck::score_performance(&build));
}
