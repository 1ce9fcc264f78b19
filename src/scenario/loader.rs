//! Load named scenarios from CSV files

use csv::Reader;
use std::path::Path;

use super::ScenarioInput;
use crate::error::{DynamicsError, DynamicsResult};

/// Default scenario file location used by the batch binary
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// A scenario together with the label it carries in a scenario file
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct NamedScenario {
    /// Label from the Name column
    pub name: String,
    /// Converted, validated inputs in fraction units
    pub input: ScenarioInput,
}

/// Raw CSV row; rates are percent-unit, matching how scenario files are
/// authored by hand
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialRatioPct")]
    initial_ratio_pct: f64,
    #[serde(rename = "InterestRatePct")]
    interest_rate_pct: f64,
    #[serde(rename = "GrowthRatePct")]
    growth_rate_pct: f64,
    #[serde(rename = "InflationRatePct")]
    inflation_rate_pct: f64,
    #[serde(rename = "TaxRatePct")]
    tax_rate_pct: f64,
    #[serde(rename = "SpendingRatePct")]
    spending_rate_pct: f64,
}

impl CsvRow {
    fn to_scenario(self) -> DynamicsResult<NamedScenario> {
        let input = ScenarioInput::from_percentages(
            self.initial_ratio_pct,
            self.interest_rate_pct,
            self.growth_rate_pct,
            self.inflation_rate_pct,
            self.tax_rate_pct,
            self.spending_rate_pct,
        );

        input.validate().map_err(|source| DynamicsError::InvalidScenario {
            name: self.name.clone(),
            source: Box::new(source),
        })?;

        Ok(NamedScenario {
            name: self.name,
            input,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> DynamicsResult<Vec<NamedScenario>> {
    let reader = Reader::from_path(path)?;
    load_from_csv_reader(reader)
}

/// Load scenarios from any reader (e.g. string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> DynamicsResult<Vec<NamedScenario>> {
    load_from_csv_reader(Reader::from_reader(reader))
}

/// Load scenarios from the default scenario file location
pub fn load_default_scenarios() -> DynamicsResult<Vec<NamedScenario>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}

fn load_from_csv_reader<R: std::io::Read>(mut reader: Reader<R>) -> DynamicsResult<Vec<NamedScenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,InitialRatioPct,InterestRatePct,GrowthRatePct,InflationRatePct,TaxRatePct,SpendingRatePct
baseline,98.0,4.5,2.0,2.5,30.0,32.0
consolidation,98.0,4.5,2.0,2.5,33.0,30.0
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let baseline = &scenarios[0];
        assert_eq!(baseline.name, "baseline");
        assert_eq!(baseline.input, ScenarioInput::baseline());

        let consolidation = &scenarios[1];
        assert_eq!(consolidation.name, "consolidation");
        assert!(consolidation.input.primary_balance() > 0.0);
    }

    #[test]
    fn test_load_default_scenario_file() {
        let scenarios = load_default_scenarios().expect("Failed to load scenarios");
        assert_eq!(scenarios.len(), 8);

        // First row is the reference scenario
        let first = &scenarios[0];
        assert_eq!(first.name, "baseline");
        assert_eq!(first.input, ScenarioInput::baseline());

        // Check rate_shock (index 4)
        let shock = &scenarios[4];
        assert_eq!(shock.name, "rate_shock");
        assert_eq!(shock.input.nominal_interest_rate, 0.075);

        // Check low_debt_start (index 7)
        let low = &scenarios[7];
        assert_eq!(low.name, "low_debt_start");
        assert_eq!(low.input.initial_ratio, 0.45);
        assert_eq!(low.input.spending_rate, 0.315);
    }

    #[test]
    fn test_invalid_row_names_the_scenario() {
        let bad = "\
Name,InitialRatioPct,InterestRatePct,GrowthRatePct,InflationRatePct,TaxRatePct,SpendingRatePct
collapse,98.0,4.5,-100.0,0.0,30.0,32.0
";
        match load_scenarios_from_reader(bad.as_bytes()) {
            Err(DynamicsError::InvalidScenario { name, source }) => {
                assert_eq!(name, "collapse");
                assert!(matches!(*source, DynamicsError::InvalidParameters { .. }));
            }
            other => panic!("expected InvalidScenario, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_is_a_parse_error() {
        let truncated = "\
Name,InitialRatioPct,InterestRatePct
baseline,98.0,4.5
";
        assert!(matches!(
            load_scenarios_from_reader(truncated.as_bytes()),
            Err(DynamicsError::Csv(_))
        ));
    }
}
