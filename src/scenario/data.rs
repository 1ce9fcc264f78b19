//! Scenario inputs for debt-to-GDP projections

use serde::{Deserialize, Serialize};

use crate::error::{DynamicsError, DynamicsResult};

/// Macroeconomic inputs for a single projection run
///
/// All rates are annual fractions (0.045 = 4.5%), never percentages.
/// Percent-unit callers convert at the boundary via [`from_percentages`].
/// Build once per run and pass by reference into the projector and
/// analyzer; nothing mutates a scenario after construction.
///
/// [`from_percentages`]: ScenarioInput::from_percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Debt-to-GDP ratio at year 0, fraction of GDP (0.98 = 98%)
    pub initial_ratio: f64,

    /// Nominal interest rate paid on outstanding debt
    pub nominal_interest_rate: f64,

    /// Real GDP growth rate
    pub real_growth_rate: f64,

    /// Inflation rate (GDP deflator)
    pub inflation_rate: f64,

    /// Tax revenue as a share of GDP
    pub tax_rate: f64,

    /// Government spending as a share of GDP
    pub spending_rate: f64,
}

impl ScenarioInput {
    /// Create a scenario from fraction-unit inputs
    pub fn new(
        initial_ratio: f64,
        nominal_interest_rate: f64,
        real_growth_rate: f64,
        inflation_rate: f64,
        tax_rate: f64,
        spending_rate: f64,
    ) -> Self {
        Self {
            initial_ratio,
            nominal_interest_rate,
            real_growth_rate,
            inflation_rate,
            tax_rate,
            spending_rate,
        }
    }

    /// Create a scenario from percent-unit inputs (98.0 = 98%)
    ///
    /// Interactive front ends and scenario files express rates in percent;
    /// this is the single place that conversion happens. No range clamping
    /// is applied here: front ends may restrict their own controls, but the
    /// engine accepts any real value.
    pub fn from_percentages(
        initial_ratio_pct: f64,
        nominal_interest_rate_pct: f64,
        real_growth_rate_pct: f64,
        inflation_rate_pct: f64,
        tax_rate_pct: f64,
        spending_rate_pct: f64,
    ) -> Self {
        Self::new(
            initial_ratio_pct / 100.0,
            nominal_interest_rate_pct / 100.0,
            real_growth_rate_pct / 100.0,
            inflation_rate_pct / 100.0,
            tax_rate_pct / 100.0,
            spending_rate_pct / 100.0,
        )
    }

    /// Reference scenario: 98% initial debt, 4.5% nominal interest,
    /// 2% real growth, 2.5% inflation, 30% tax revenue, 32% spending
    pub fn baseline() -> Self {
        Self::new(0.98, 0.045, 0.02, 0.025, 0.30, 0.32)
    }

    /// Check the recurrence precondition
    ///
    /// Rejects NaN/infinite inputs and the degenerate case
    /// `(1 + g) * (1 + pi) = 0`. Finite out-of-domain values (negative
    /// growth, absurd rates) are legal: the recurrence is well-defined for
    /// them, if explosive.
    pub fn validate(&self) -> DynamicsResult<()> {
        let fields = [
            ("initial_ratio", self.initial_ratio),
            ("nominal_interest_rate", self.nominal_interest_rate),
            ("real_growth_rate", self.real_growth_rate),
            ("inflation_rate", self.inflation_rate),
            ("tax_rate", self.tax_rate),
            ("spending_rate", self.spending_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DynamicsError::NonFiniteInput { name, value });
            }
        }

        self.debt_multiplier()?;
        Ok(())
    }

    /// Year-over-year multiplier applied to the debt ratio:
    /// `(1 + i) / ((1 + g) * (1 + pi))`
    ///
    /// Fails when the denominator is zero; the recurrence has no value
    /// there and must not silently evaluate to NaN or infinity.
    pub fn debt_multiplier(&self) -> DynamicsResult<f64> {
        let denominator = (1.0 + self.real_growth_rate) * (1.0 + self.inflation_rate);
        if denominator == 0.0 {
            return Err(DynamicsError::InvalidParameters {
                real_growth_rate: self.real_growth_rate,
                inflation_rate: self.inflation_rate,
            });
        }
        Ok((1.0 + self.nominal_interest_rate) / denominator)
    }

    /// Primary deficit share added to the ratio each year: `s - tau`
    pub fn primary_deficit(&self) -> f64 {
        self.spending_rate - self.tax_rate
    }

    /// Primary balance `tau - s` (positive = surplus)
    pub fn primary_balance(&self) -> f64 {
        self.tax_rate - self.spending_rate
    }
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_percentages_matches_fractions() {
        let from_pct = ScenarioInput::from_percentages(98.0, 4.5, 2.0, 2.5, 30.0, 32.0);
        assert_eq!(from_pct, ScenarioInput::baseline());
    }

    #[test]
    fn test_baseline_multiplier() {
        let scenario = ScenarioInput::baseline();
        let multiplier = scenario.debt_multiplier().unwrap();

        // 1.045 / (1.02 * 1.025) = 1.045 / 1.0455
        assert_relative_eq!(multiplier, 1.045 / 1.0455, epsilon = 1e-15);
        assert!(multiplier < 1.0);
    }

    #[test]
    fn test_primary_balance_signs() {
        let baseline = ScenarioInput::baseline();
        assert!(baseline.primary_balance() < 0.0);
        assert!(baseline.primary_deficit() > 0.0);
        assert_relative_eq!(
            baseline.primary_balance(),
            -baseline.primary_deficit(),
            epsilon = 1e-15
        );

        let surplus = ScenarioInput::new(0.98, 0.045, 0.02, 0.025, 0.33, 0.30);
        assert!(surplus.primary_balance() > 0.0);
    }

    #[test]
    fn test_validate_rejects_zero_denominator() {
        let full_collapse = ScenarioInput::new(0.98, 0.045, -1.0, 0.0, 0.30, 0.32);
        assert!(matches!(
            full_collapse.validate(),
            Err(DynamicsError::InvalidParameters { .. })
        ));

        let full_deflation = ScenarioInput::new(0.98, 0.045, 0.02, -1.0, 0.30, 0.32);
        assert!(matches!(
            full_deflation.validate(),
            Err(DynamicsError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let nan_tax = ScenarioInput::new(0.98, 0.045, 0.02, 0.025, f64::NAN, 0.32);
        match nan_tax.validate() {
            Err(DynamicsError::NonFiniteInput { name, .. }) => assert_eq!(name, "tax_rate"),
            other => panic!("expected NonFiniteInput, got {:?}", other),
        }

        let inf_growth = ScenarioInput::new(0.98, 0.045, f64::INFINITY, 0.025, 0.30, 0.32);
        assert!(matches!(
            inf_growth.validate(),
            Err(DynamicsError::NonFiniteInput { name: "real_growth_rate", .. })
        ));
    }

    #[test]
    fn test_validate_accepts_extreme_but_finite_rates() {
        // Deep negative growth and deflation are legal as long as the
        // denominator stays nonzero.
        let extreme = ScenarioInput::new(2.5, 0.40, -0.15, -0.05, 0.10, 0.55);
        assert!(extreme.validate().is_ok());
        assert!(extreme.debt_multiplier().unwrap() > 1.0);
    }
}
