//! Debt Dynamics - deterministic projection engine for government
//! debt-to-GDP trajectories
//!
//! This library provides:
//! - Year-by-year debt ratio projection under the fiscal dynamics identity
//! - Summary metrics (final ratio, interest-growth differential, primary balance)
//! - Sustainability classification with an overridable crisis threshold
//! - Named-scenario CSV loading and parallel batch runs
//!
//! All core computation is pure: rates in, trajectory and metrics out,
//! fraction units (0.045 = 4.5%) throughout. Percent conversion belongs to
//! the boundaries (CLI, scenario files, HTTP handler).

pub mod analysis;
pub mod error;
pub mod projection;
pub mod runner;
pub mod scenario;

// Re-export commonly used types
pub use analysis::{AnalysisConfig, Analyzer, SummaryMetrics, Sustainability};
pub use error::{DynamicsError, DynamicsResult};
pub use projection::{DebtProjector, ProjectionConfig, Trajectory, TrajectoryPoint};
pub use runner::{ScenarioRunner, SimulationResult};
pub use scenario::{NamedScenario, ScenarioInput};
