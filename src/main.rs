//! Debt Dynamics CLI
//!
//! Command-line interface for projecting a government debt-to-GDP ratio
//! under fixed macroeconomic assumptions. Rates are entered in percent and
//! converted once at this boundary; the engine itself works in fractions.

use anyhow::Context;
use clap::Parser;
use debt_dynamics::{
    analysis::{AnalysisConfig, Analyzer, Sustainability},
    projection::{DebtProjector, ProjectionConfig, Trajectory},
    runner::SimulationResult,
    scenario::ScenarioInput,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Project a government debt-to-GDP ratio forward under fixed macro
/// assumptions
#[derive(Parser, Debug)]
#[command(name = "debt-dynamics", version)]
struct Cli {
    /// Initial debt-to-GDP ratio, percent of GDP
    #[arg(long, default_value_t = 98.0)]
    initial_ratio: f64,

    /// Nominal interest rate, percent
    #[arg(long, default_value_t = 4.5)]
    interest_rate: f64,

    /// Real GDP growth rate, percent
    #[arg(long, default_value_t = 2.0)]
    growth_rate: f64,

    /// Inflation rate, percent
    #[arg(long, default_value_t = 2.5)]
    inflation_rate: f64,

    /// Tax revenue, percent of GDP
    #[arg(long, default_value_t = 30.0)]
    tax_rate: f64,

    /// Government spending, percent of GDP
    #[arg(long, default_value_t = 32.0)]
    spending_rate: f64,

    /// Projection horizon in years
    #[arg(long, default_value_t = 20)]
    horizon: u32,

    /// Crisis threshold, percent of GDP
    #[arg(long, default_value_t = 150.0)]
    crisis_threshold: f64,

    /// Write the projected trajectory to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let scenario = ScenarioInput::from_percentages(
        cli.initial_ratio,
        cli.interest_rate,
        cli.growth_rate,
        cli.inflation_rate,
        cli.tax_rate,
        cli.spending_rate,
    );

    let projector = DebtProjector::new(ProjectionConfig {
        horizon_years: cli.horizon,
    });
    let trajectory = projector.project(&scenario)?;

    let analyzer = Analyzer::new(AnalysisConfig {
        crisis_threshold: cli.crisis_threshold / 100.0,
    });
    let metrics = analyzer.analyze(&scenario, &trajectory);

    // The CSV export happens in both display modes.
    if let Some(csv_path) = &cli.output {
        write_trajectory_csv(csv_path, &trajectory)?;
    }

    if cli.json {
        let result = SimulationResult {
            scenario,
            trajectory,
            metrics,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Debt Dynamics v0.1.0");
    println!("====================\n");

    println!("Scenario:");
    println!("  Initial Debt-to-GDP: {:.1}%", cli.initial_ratio);
    println!("  Nominal Interest:    {:.1}%", cli.interest_rate);
    println!("  Real Growth:         {:.1}%", cli.growth_rate);
    println!("  Inflation:           {:.1}%", cli.inflation_rate);
    println!("  Tax Revenue:         {:.1}% of GDP", cli.tax_rate);
    println!("  Spending:            {:.1}% of GDP", cli.spending_rate);
    println!();

    println!("Projection ({} years):", trajectory.horizon());
    println!("{:>5} {:>12}", "Year", "Debt/GDP");
    println!("{}", "-".repeat(18));
    for point in trajectory.points() {
        println!("{:>5} {:>11.2}%", point.year, point.ratio * 100.0);
    }

    if let Some(csv_path) = &cli.output {
        println!("\nFull trajectory written to: {}", csv_path.display());
    }

    println!("\nSummary:");
    println!("  Final Debt-to-GDP:   {:.1}%", metrics.final_ratio * 100.0);
    println!("  Change over horizon: {:+.1}%", metrics.delta * 100.0);
    println!(
        "  Interest-Growth r-g: {:+.2}%  [{}]",
        metrics.interest_growth_differential * 100.0,
        metrics.differential_label()
    );
    println!(
        "  {}: {:.1}% of GDP",
        metrics.balance_label(),
        metrics.primary_balance.abs() * 100.0
    );
    println!("  Classification:      {}", metrics.classification.as_str());

    match metrics.classification {
        Sustainability::Crisis => println!(
            "\nCrisis warning: the debt ratio exceeds {:.0}% of GDP within {} years.",
            cli.crisis_threshold,
            trajectory.horizon()
        ),
        Sustainability::Rising => {
            println!("\nRising debt: the ratio is increasing over the horizon.")
        }
        Sustainability::Sustainable => {
            println!("\nSustainable: the ratio is flat or falling over the horizon.")
        }
    }

    Ok(())
}

fn write_trajectory_csv(path: &Path, trajectory: &Trajectory) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    writeln!(file, "Year,DebtToGdpPct")?;
    for point in trajectory.points() {
        writeln!(file, "{},{:.8}", point.year, point.ratio * 100.0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_still_writes_csv_export() {
        let path = std::env::temp_dir().join("debt_dynamics_json_export.csv");
        let cli = Cli::parse_from([
            "debt-dynamics",
            "--json",
            "--output",
            path.to_str().unwrap(),
        ]);
        run(cli).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Year,DebtToGdpPct"));
        // Header plus years 0..=20
        assert_eq!(contents.lines().count(), 22);

        std::fs::remove_file(&path).unwrap();
    }
}
