//! Core projection engine for the annual debt-to-GDP recurrence

use super::trajectory::Trajectory;
use crate::error::DynamicsResult;
use crate::scenario::ScenarioInput;

/// Default projection horizon in years
pub const DEFAULT_HORIZON_YEARS: u32 = 20;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of future years to project past year 0.
    /// A horizon of N produces N + 1 ratios (years 0..=N); 0 is legal and
    /// yields only the initial ratio.
    pub horizon_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Main projection engine
///
/// Applies the government budget constraint identity year by year:
///
/// ```text
/// d_t = [(1 + i) / ((1 + g) * (1 + pi))] * d_{t-1} + (s - tau)
/// ```
///
/// with `d_0` equal to the scenario's initial ratio. The recurrence links
/// nominal interest, real growth, and inflation (via the Fisher relation)
/// to the debt stock relative to GDP, with `s - tau` the primary deficit
/// added each year.
pub struct DebtProjector {
    config: ProjectionConfig,
}

impl DebtProjector {
    /// Create a new projector with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single scenario
    ///
    /// Pure and deterministic: the same scenario and config always yield
    /// the identical sequence. Fails up front when the scenario violates
    /// the recurrence precondition; no partial trajectory is returned.
    /// Ratios are never clamped or rounded here: negative and divergent
    /// paths are legitimate outcomes.
    pub fn project(&self, scenario: &ScenarioInput) -> DynamicsResult<Trajectory> {
        scenario.validate()?;

        let multiplier = scenario.debt_multiplier()?;
        let primary_deficit = scenario.primary_deficit();

        let mut ratios = Vec::with_capacity(self.config.horizon_years as usize + 1);
        let mut ratio = scenario.initial_ratio;
        ratios.push(ratio);

        for _year in 1..=self.config.horizon_years {
            ratio = multiplier * ratio + primary_deficit;
            ratios.push(ratio);
        }

        Trajectory::from_ratios(ratios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DynamicsError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_projection_length_and_years() {
        let projector = DebtProjector::new(ProjectionConfig::default());
        let trajectory = projector.project(&ScenarioInput::baseline()).unwrap();

        assert_eq!(trajectory.len(), 21);
        assert_eq!(trajectory.horizon(), 20);
        assert_eq!(trajectory.points()[0].year, 0);
        assert_eq!(trajectory.points()[20].year, 20);
        assert_eq!(trajectory.initial_ratio(), 0.98);
    }

    #[test]
    fn test_zero_horizon_returns_initial_only() {
        let projector = DebtProjector::new(ProjectionConfig { horizon_years: 0 });
        let trajectory = projector.project(&ScenarioInput::baseline()).unwrap();

        assert_eq!(trajectory.ratios(), vec![0.98]);
    }

    #[test]
    fn test_identity_scenario_stays_constant() {
        // i = g with zero inflation collapses the multiplier to exactly 1,
        // and tau = s zeroes the primary deficit.
        let scenario = ScenarioInput::new(0.98, 0.03, 0.03, 0.0, 0.30, 0.30);
        let projector = DebtProjector::new(ProjectionConfig { horizon_years: 50 });
        let trajectory = projector.project(&scenario).unwrap();

        for point in trajectory.points() {
            assert_eq!(point.ratio, 0.98);
        }
    }

    #[test]
    fn test_deterministic_bit_identical() {
        let scenario = ScenarioInput::baseline();
        let projector = DebtProjector::new(ProjectionConfig::default());

        let first = projector.project(&scenario).unwrap();
        let second = projector.project(&scenario).unwrap();

        assert_eq!(first.ratios(), second.ratios());
    }

    #[test]
    fn test_reference_first_step() {
        let projector = DebtProjector::new(ProjectionConfig::default());
        let trajectory = projector.project(&ScenarioInput::baseline()).unwrap();

        let multiplier = (1.0 + 0.045) / ((1.0 + 0.02) * (1.0 + 0.025));
        let expected_d1 = multiplier * 0.98 + (0.32 - 0.30);
        let d1 = trajectory.points()[1].ratio;

        assert_eq!(d1, expected_d1);
        assert_abs_diff_eq!(d1, 0.9995313247, epsilon = 1e-6);
    }

    #[test]
    fn test_reference_full_sequence() {
        let projector = DebtProjector::new(ProjectionConfig::default());
        let trajectory = projector.project(&ScenarioInput::baseline()).unwrap();

        let multiplier = (1.0 + 0.045) / ((1.0 + 0.02) * (1.0 + 0.025));
        let deficit = 0.32 - 0.30;
        let mut expected = 0.98;
        for (year, point) in trajectory.points().iter().enumerate() {
            if year > 0 {
                expected = multiplier * expected + deficit;
            }
            assert_eq!(point.ratio, expected, "mismatch at year {}", year);
        }

        // Closed form: d_20 = 41.82 - 40.84 * m^20 with m = 2090/2091.
        assert_abs_diff_eq!(trajectory.final_ratio(), 1.3688568, epsilon = 1e-6);

        // Under the reference inputs debt rises but stays below 150% of GDP.
        assert!(trajectory.final_ratio() > trajectory.initial_ratio());
        assert!(trajectory.final_ratio() < 1.50);
    }

    #[test]
    fn test_monotonic_divergence() {
        // Multiplier above 1 with a non-negative primary deficit can never
        // shrink the ratio.
        let scenario = ScenarioInput::new(0.98, 0.08, 0.01, 0.01, 0.30, 0.30);
        assert!(scenario.debt_multiplier().unwrap() > 1.0);
        assert!(scenario.primary_deficit() >= 0.0);

        let projector = DebtProjector::new(ProjectionConfig { horizon_years: 50 });
        let trajectory = projector.project(&scenario).unwrap();

        let ratios = trajectory.ratios();
        for window in ratios.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_zero_denominator_rejected_before_projecting() {
        let scenario = ScenarioInput::new(0.98, 0.045, -1.0, 0.0, 0.30, 0.32);
        let projector = DebtProjector::new(ProjectionConfig::default());

        match projector.project(&scenario) {
            Err(DynamicsError::InvalidParameters {
                real_growth_rate, ..
            }) => assert_eq!(real_growth_rate, -1.0),
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_ratios_are_not_clamped() {
        // A large sustained surplus drives the ratio through zero; the
        // engine reports the net-asset position rather than flooring it.
        let scenario = ScenarioInput::new(0.30, 0.02, 0.03, 0.02, 0.40, 0.30);
        let projector = DebtProjector::new(ProjectionConfig { horizon_years: 10 });
        let trajectory = projector.project(&scenario).unwrap();

        assert!(trajectory.final_ratio() < 0.0);
    }
}
