//! Error type shared by the distance model and the solver.

use std::time::Duration;

use thiserror::Error;

/// Errors produced while building a cost matrix or solving a tour.
///
/// None of these are retried internally; a caller that wants another attempt
/// (for example with a larger time budget) re-invokes the solver itself.
#[derive(Debug, Error)]
pub enum TourError {
    /// A coordinate is non-finite or outside the valid latitude/longitude range.
    #[error("invalid coordinate at point {index}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        /// Index of the offending point.
        index: usize,
        /// Latitude in degrees as supplied.
        latitude: f64,
        /// Longitude in degrees as supplied.
        longitude: f64,
    },

    /// The instance cannot produce a tour (no points, missing depot, bad indices).
    #[error("infeasible instance: {0}")]
    Infeasible(String),

    /// The time budget ran out before a feasible tour was constructed.
    #[error("time budget of {budget:?} exhausted before a feasible tour was built")]
    Timeout {
        /// The configured budget.
        budget: Duration,
    },

    /// Reading point data failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Point data could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_coordinate() {
        let e = TourError::InvalidCoordinate {
            index: 3,
            latitude: f64::NAN,
            longitude: 10.0,
        };
        assert_eq!(e.to_string(), "invalid coordinate at point 3: (NaN, 10)");
    }

    #[test]
    fn test_display_timeout() {
        let e = TourError::Timeout {
            budget: Duration::from_millis(5),
        };
        assert!(e.to_string().contains("5ms"));
    }
}
