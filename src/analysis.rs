//! Summary metrics and sustainability classification for projected
//! trajectories

use serde::{Deserialize, Serialize};

use crate::projection::Trajectory;
use crate::scenario::ScenarioInput;

/// Default crisis threshold: 150% of GDP, as a fraction
///
/// A fixed policy constant, not derived from the horizon or the scenario.
pub const DEFAULT_CRISIS_THRESHOLD: f64 = 1.50;

/// Configuration for trajectory analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Debt ratio above which a trajectory is classified as a crisis,
    /// fraction of GDP
    pub crisis_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            crisis_threshold: DEFAULT_CRISIS_THRESHOLD,
        }
    }
}

/// Sustainability verdict for a projected trajectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sustainability {
    /// Final ratio above the crisis threshold
    Crisis,
    /// Debt rose net over the horizon but stayed at or under the threshold
    Rising,
    /// Debt flat or falling over the horizon
    Sustainable,
}

impl Sustainability {
    /// Classify a final ratio against the starting ratio and threshold
    ///
    /// Both comparisons are strict: a final ratio exactly at the threshold
    /// is not a crisis, and an unchanged ratio is sustainable, not rising.
    pub fn classify(initial_ratio: f64, final_ratio: f64, crisis_threshold: f64) -> Self {
        if final_ratio > crisis_threshold {
            Sustainability::Crisis
        } else if final_ratio > initial_ratio {
            Sustainability::Rising
        } else {
            Sustainability::Sustainable
        }
    }

    /// String form for CSV and JSON boundaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Sustainability::Crisis => "Crisis",
            Sustainability::Rising => "Rising",
            Sustainability::Sustainable => "Sustainable",
        }
    }
}

/// Derived metrics for one scenario and its projected trajectory
///
/// A read-only view in the same fraction units as the inputs; percent
/// conversion is left to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Debt ratio at the final projected year
    pub final_ratio: f64,

    /// Net change over the horizon: final minus year-0 ratio
    pub delta: f64,

    /// `(i - pi) - g`: real interest rate minus real growth, using the
    /// Fisher approximation `i - pi` rather than the exact decomposition
    /// `(1 + i) / (1 + pi) - 1`
    pub interest_growth_differential: f64,

    /// `tau - s`: positive = primary surplus, negative = primary deficit
    pub primary_balance: f64,

    /// Sustainability verdict for the trajectory
    pub classification: Sustainability,
}

impl SummaryMetrics {
    /// Debt-service outlook label from the differential sign
    pub fn differential_label(&self) -> &'static str {
        if self.interest_growth_differential > 0.0 {
            "Unfavorable (r > g)"
        } else {
            "Favorable (g > r)"
        }
    }

    /// Fiscal stance label from the primary balance sign
    pub fn balance_label(&self) -> &'static str {
        if self.primary_balance > 0.0 {
            "Primary Surplus"
        } else {
            "Primary Deficit"
        }
    }
}

/// Derives summary metrics from a scenario and its projected trajectory
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create a new analyzer with the given config
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Compute the metrics for one projected trajectory
    ///
    /// Pure and side-effect free. The scenario must be the one the
    /// trajectory was projected from, since the differential and balance
    /// come from the rate inputs while final and delta come from the path.
    pub fn analyze(&self, scenario: &ScenarioInput, trajectory: &Trajectory) -> SummaryMetrics {
        let initial_ratio = trajectory.initial_ratio();
        let final_ratio = trajectory.final_ratio();

        SummaryMetrics {
            final_ratio,
            delta: final_ratio - initial_ratio,
            interest_growth_differential: (scenario.nominal_interest_rate
                - scenario.inflation_rate)
                - scenario.real_growth_rate,
            primary_balance: scenario.primary_balance(),
            classification: Sustainability::classify(
                initial_ratio,
                final_ratio,
                self.config.crisis_threshold,
            ),
        }
    }
}
