//! Projection engine and trajectory output for the debt recurrence

mod engine;
mod trajectory;

pub use engine::{DebtProjector, ProjectionConfig, DEFAULT_HORIZON_YEARS};
pub use trajectory::{Trajectory, TrajectoryPoint};
