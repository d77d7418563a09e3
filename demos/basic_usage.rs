// ============================================================================
// Basic Usage Example
// ============================================================================

use rounding_strategies::prelude::*;
use rounding_strategies::utils::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=rounding_strategies=trace shows every composite decision
    if let Err(err) = init_tracing() {
        eprintln!("logging disabled: {}", err);
    }

    println!("=== Rounding Strategies Example ===\n");

    let samples = [-2.5, -1.5, -0.9, -0.5, 0.5, 0.9, 1.5, 2.5];

    println!("Simple rounders:");
    for mode in RoundingMode::ALL_DETERMINISTIC.iter().filter(|m| !m.is_stateful()) {
        let mut rounder = create_from_config(*mode, None)?;
        let rounded: Vec<f64> = samples.iter().map(|&v| rounder.round(v)).collect();
        println!("  {:<22} {:?}", mode.to_string(), rounded);
    }

    println!("\nAlternating rounder on a constant input:");
    let mut alternate = CompositeRounder::half_alternate();
    let rounded: Vec<f64> = (0..6).map(|_| alternate.round(0.5)).collect();
    println!("  half-alternate(0.5) x6 = {:?}", rounded);

    println!("\nBias over 10,000 ties (value 2.5, exact sum 25,000):");
    let ties = 10_000;
    let contenders: Vec<Box<dyn Rounder>> = vec![
        Box::new(SimpleRounder::half_up()),
        Box::new(SimpleRounder::half_even()),
        Box::new(CompositeRounder::half_alternate()),
        RounderBuilder::new()
            .half_random(0.5)
            .random_source(RngSource::seeded(2013))
            .build()?,
    ];
    for mut rounder in contenders {
        let total: f64 = (0..ties).map(|_| rounder.round(2.5)).sum();
        println!("  {:<22} {}", rounder.name(), total);
    }

    // Parsing user supplied modes
    let mode: RoundingMode = "symmetric-random:0.25".parse()?;
    let mut rounder = create_from_config(mode, Some(Box::new(RngSource::from_entropy())))?;
    let ups = (0..1_000).filter(|_| rounder.round(0.5) == 1.0).count();
    println!("\n{} rounded 0.5 up {} times out of 1000", mode, ups);

    Ok(())
}
