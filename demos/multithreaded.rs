use std::sync::Arc;
use std::thread;

use rigcheck::{BuildSelection, EngineBuilder, GraphicsCard, Motherboard, PowerSupply, Processor};

fn main() {
    let engine = Arc::new(
        EngineBuilder::new()
            .build()
            .expect("engine configuration is valid"),
    );

    let builds = vec![
        (
            "matched",
            BuildSelection::new()
                .with(Processor::new().socket("AM5"))
                .with(Motherboard::new().socket("AM5")),
        ),
        (
            "mismatched",
            BuildSelection::new()
                .with(Processor::new().socket("AM5"))
                .with(Motherboard::new().socket("LGA1700")),
        ),
        (
            "underpowered",
            BuildSelection::new()
                .with(Processor::new().tdp(170.0))
                .with(GraphicsCard::new().tdp(450.0))
                .with(PowerSupply::new().wattage(600)),
        ),
    ];

    let handles: Vec<_> = builds
        .into_iter()
        .map(|(name, build)| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || (name, engine.evaluate(&build)))
        })
        .collect();

    for handle in handles {
        let (name, report) = handle.join().expect("evaluation thread panicked");
        println!("{name}: {}", report.summary());
    }
}
