//! Scenario runner for end-to-end projection and analysis
//!
//! Chains the projector and analyzer behind a single call, and runs
//! scenario batches in parallel. Every invocation is an independent pure
//! computation, so batches need no coordination.

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{AnalysisConfig, Analyzer, SummaryMetrics};
use crate::error::DynamicsResult;
use crate::projection::{DebtProjector, ProjectionConfig, Trajectory};
use crate::scenario::ScenarioInput;

/// One scenario's complete output: the inputs, the projected path, and the
/// derived metrics
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    /// The inputs the run was projected from
    pub scenario: ScenarioInput,
    /// Projected debt path, years 0..=horizon
    pub trajectory: Trajectory,
    /// Derived metrics and classification
    pub metrics: SummaryMetrics,
}

/// Pre-configured runner for single scenarios and batches
///
/// # Example
/// ```
/// use debt_dynamics::{ScenarioInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let result = runner.run(&ScenarioInput::baseline()).unwrap();
/// assert_eq!(result.trajectory.horizon(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    projection: ProjectionConfig,
    analysis: AnalysisConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default horizon and crisis threshold
    pub fn new() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }

    /// Create a runner with explicit configs
    pub fn with_configs(projection: ProjectionConfig, analysis: AnalysisConfig) -> Self {
        Self {
            projection,
            analysis,
        }
    }

    /// Project and analyze a single scenario
    pub fn run(&self, scenario: &ScenarioInput) -> DynamicsResult<SimulationResult> {
        let projector = DebtProjector::new(self.projection.clone());
        let trajectory = projector.project(scenario)?;

        let analyzer = Analyzer::new(self.analysis.clone());
        let metrics = analyzer.analyze(scenario, &trajectory);

        Ok(SimulationResult {
            scenario: *scenario,
            trajectory,
            metrics,
        })
    }

    /// Run many scenarios in parallel with the same configs
    ///
    /// Results come back in input order. A failing scenario yields its own
    /// error entry without aborting the rest of the batch.
    pub fn run_batch(&self, scenarios: &[ScenarioInput]) -> Vec<DynamicsResult<SimulationResult>> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Run one scenario at several horizons with the same analysis config
    pub fn run_horizons(
        &self,
        scenario: &ScenarioInput,
        horizons: &[u32],
    ) -> DynamicsResult<Vec<SimulationResult>> {
        horizons
            .iter()
            .map(|&horizon_years| {
                let projector = DebtProjector::new(ProjectionConfig { horizon_years });
                let trajectory = projector.project(scenario)?;
                let metrics =
                    Analyzer::new(self.analysis.clone()).analyze(scenario, &trajectory);
                Ok(SimulationResult {
                    scenario: *scenario,
                    trajectory,
                    metrics,
                })
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
