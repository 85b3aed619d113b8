use rigcheck::power::{power_breakdown, PowerProfile};
use rigcheck::{BuildSelection, Case, CpuCooler, Engine, GraphicsCard, Motherboard, PowerSupply, Processor};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=rigcheck=trace shows each rule and power contribution.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let build = BuildSelection::new()
        .with(Processor::new().socket("LGA1700").tdp(253.0).performance_score(60_000))
        .with(Motherboard::new().socket("LGA1700"))
        .with(GraphicsCard::new().length(357).tdp(450.0).price(1599.0))
        .with(PowerSupply::new().wattage(850))
        .with(Case::new().max_gpu_length(360).fan_slots(1, 0, 1))
        .with(CpuCooler::liquid(360).supports("LGA1700"));

    let trace = Engine::standard().evaluate_detailed(&build);

    println!("{trace}");
    println!();
    print!("{}", trace.report());
    println!();
    for outcome in trace.outcomes() {
        println!("  {:<24} {} finding(s)", outcome.rule, outcome.findings);
    }

    println!();
    let breakdown = power_breakdown(&build, &PowerProfile::SUFFICIENCY);
    for contribution in breakdown.contributions() {
        println!(
            "  {:<14} {:>6.1} W ({:?})",
            contribution.slot, contribution.watts, contribution.source
        );
    }
    println!("  {:<14} {:>6.1} W", "overhead", breakdown.overhead_watts());
    println!("  {:<14} {:>6} W", "total", breakdown.total_watts());
}
