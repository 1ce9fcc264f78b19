//! Trajectory output structures for projections

use serde::{Deserialize, Serialize};

use crate::error::{DynamicsError, DynamicsResult};

/// A single projected point: the debt-to-GDP ratio at one year offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Years from the projection start; year 0 carries the initial ratio
    pub year: u32,

    /// Debt-to-GDP ratio as a fraction of GDP
    pub ratio: f64,
}

/// Complete projected path of the debt ratio, years 0..=horizon
///
/// Immutable once produced: points stay in year order, and index 0 always
/// holds the scenario's initial ratio. Holds at least one point, so the
/// initial and final accessors are total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Build a trajectory from year-ordered ratios (index = year offset)
    ///
    /// At least the year-0 ratio is required.
    pub fn from_ratios(ratios: Vec<f64>) -> DynamicsResult<Self> {
        if ratios.is_empty() {
            return Err(DynamicsError::EmptyTrajectory);
        }

        let points = ratios
            .into_iter()
            .enumerate()
            .map(|(year, ratio)| TrajectoryPoint {
                year: year as u32,
                ratio,
            })
            .collect();

        Ok(Self { points })
    }

    /// All projected points in year order
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    /// Ratios only, in year order
    pub fn ratios(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ratio).collect()
    }

    /// Ratio at year 0
    pub fn initial_ratio(&self) -> f64 {
        self.points[0].ratio
    }

    /// Ratio at the final projected year
    pub fn final_ratio(&self) -> f64 {
        self.points[self.points.len() - 1].ratio
    }

    /// Number of projected future years (points minus the year-0 entry)
    pub fn horizon(&self) -> u32 {
        (self.points.len() - 1) as u32
    }

    /// Number of points, horizon + 1
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed trajectory
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
