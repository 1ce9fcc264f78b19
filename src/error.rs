//! Error types for debt projection runs

use thiserror::Error;

/// A specialized Result type for projection operations.
pub type DynamicsResult<T> = Result<T, DynamicsError>;

/// The error type for projection and scenario-loading operations.
#[derive(Error, Debug)]
pub enum DynamicsError {
    /// The recurrence denominator `(1 + g) * (1 + pi)` is zero, leaving the
    /// debt recurrence undefined.
    #[error("invalid parameters: (1 + g) * (1 + pi) = 0 (real_growth_rate = {real_growth_rate}, inflation_rate = {inflation_rate})")]
    InvalidParameters {
        /// Real growth rate that produced the zero denominator.
        real_growth_rate: f64,
        /// Inflation rate that produced the zero denominator.
        inflation_rate: f64,
    },

    /// An input parameter was NaN or infinite.
    #[error("non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A trajectory needs at least the year-0 ratio.
    #[error("empty trajectory: at least the year-0 ratio is required")]
    EmptyTrajectory,

    /// A scenario file could not be read or parsed.
    #[error("scenario file: {0}")]
    Csv(#[from] csv::Error),

    /// A row in a scenario file failed validation.
    #[error("scenario '{name}': {source}")]
    InvalidScenario {
        /// Name column of the offending row.
        name: String,
        /// The underlying validation failure.
        #[source]
        source: Box<DynamicsError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let err = DynamicsError::InvalidParameters {
            real_growth_rate: -1.0,
            inflation_rate: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("(1 + g) * (1 + pi) = 0"));
        assert!(msg.contains("real_growth_rate = -1"));
    }

    #[test]
    fn test_invalid_scenario_wraps_source() {
        let err = DynamicsError::InvalidScenario {
            name: "stagnation".to_string(),
            source: Box::new(DynamicsError::NonFiniteInput {
                name: "tax_rate",
                value: f64::NAN,
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("stagnation"));
        assert!(msg.contains("tax_rate"));
    }
}
