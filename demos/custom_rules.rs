use rigcheck::{
    BuildSelection, EngineBuilder, Finding, FindingKind, Policy, Processor, Severity, Slot,
    Storage,
};

fn main() {
    // Stricter power headroom, and no memory speed advisory.
    let mut policy = Policy::default();
    policy.headroom.recommended_ratio = 1.5;
    policy.memory_speed_advisory_mhz = u32::MAX;

    let engine = EngineBuilder::new()
        .policy(policy)
        .without_rule("cpu_gpu_balance")
        .rule("boot_drive", |selection, _policy| {
            match selection.storage() {
                Some(drive) if drive.is_nvme_class() => Vec::new(),
                Some(_) => vec![Finding::warning(
                    FindingKind::Custom("slow_boot_drive".into()),
                    "boot drive is not NVMe",
                    [Slot::Storage],
                )],
                None => vec![Finding::new(
                    FindingKind::Custom("no_boot_drive".into()),
                    Severity::Critical,
                    "no storage drive selected",
                    [Slot::Storage],
                )],
            }
        })
        .build()
        .expect("engine configuration is valid");

    println!("{engine}");

    let build = BuildSelection::new()
        .with(Processor::new().socket("AM5"))
        .with(Storage::new().interface("SATA III"));
    print!("{}", engine.evaluate(&build));
}
