//! Run projections for every scenario in a scenario file
//!
//! Writes one summary row per scenario for side-by-side comparison.
//! Usage: run_batch [scenarios.csv] [summary.csv]

use anyhow::Context;
use debt_dynamics::analysis::Sustainability;
use debt_dynamics::runner::ScenarioRunner;
use debt_dynamics::scenario::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "batch_summary.csv".to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);

    let scenarios =
        load_scenarios(&input_path).with_context(|| format!("failed to load {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();

    println!("Running projections...");
    let proj_start = Instant::now();

    let inputs: Vec<_> = scenarios.iter().map(|s| s.input).collect();
    let results = runner.run_batch(&inputs);

    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut file = File::create(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;
    writeln!(
        file,
        "Name,FinalRatioPct,DeltaPct,InterestGrowthDiffPct,PrimaryBalancePct,Classification"
    )?;

    let mut crisis = 0usize;
    let mut rising = 0usize;
    let mut sustainable = 0usize;

    for (named, result) in scenarios.iter().zip(&results) {
        match result {
            Ok(run) => {
                let m = &run.metrics;
                match m.classification {
                    Sustainability::Crisis => crisis += 1,
                    Sustainability::Rising => rising += 1,
                    Sustainability::Sustainable => sustainable += 1,
                }
                writeln!(
                    file,
                    "{},{:.4},{:.4},{:.4},{:.4},{}",
                    named.name,
                    m.final_ratio * 100.0,
                    m.delta * 100.0,
                    m.interest_growth_differential * 100.0,
                    m.primary_balance * 100.0,
                    m.classification.as_str(),
                )?;
            }
            Err(e) => {
                log::warn!("scenario '{}' skipped: {}", named.name, e);
            }
        }
    }

    println!("Output written to {}", output_path);

    println!("\nBatch Summary:");
    println!("  Scenarios:   {}", scenarios.len());
    println!("  Crisis:      {}", crisis);
    println!("  Rising:      {}", rising);
    println!("  Sustainable: {}", sustainable);

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
