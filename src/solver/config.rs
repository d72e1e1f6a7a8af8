//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wall-clock budget.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Default guided local search penalty coefficient.
pub const DEFAULT_LAMBDA_COEFFICIENT: f64 = 0.1;

/// Improvement strategy applied after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LocalSearchStrategy {
    /// Plain 2-opt descent: stop at the first 2-opt local optimum.
    TwoOpt,
    /// Guided local search: penalise arcs of local optima and keep searching.
    GuidedLocalSearch,
}

/// Parameters for one solve.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_tour::solver::{LocalSearchStrategy, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_time_limit(Duration::from_secs(2))
///     .with_strategy(LocalSearchStrategy::TwoOpt);
/// assert_eq!(config.time_limit, Duration::from_secs(2));
/// assert!(config.or_opt);
/// assert_eq!(config.start, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wall-clock budget for the whole solve.
    pub time_limit: Duration,
    /// Improvement strategy.
    pub strategy: LocalSearchStrategy,
    /// Also apply Or-opt segment relocation during guided local search
    /// descents; ignored by [`LocalSearchStrategy::TwoOpt`].
    pub or_opt: bool,
    /// Penalty factor coefficient: λ = coef × (first local optimum cost / N).
    pub lambda_coefficient: f64,
    /// Optional cap on guided local search penalty rounds.
    pub max_iterations: Option<u64>,
    /// Start (and end) index of the tour.
    pub start: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            strategy: LocalSearchStrategy::GuidedLocalSearch,
            or_opt: true,
            lambda_coefficient: DEFAULT_LAMBDA_COEFFICIENT,
            max_iterations: None,
            start: 0,
        }
    }
}

impl SolverConfig {
    /// Sets the time budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the improvement strategy.
    pub fn with_strategy(mut self, strategy: LocalSearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables Or-opt.
    pub fn with_or_opt(mut self, or_opt: bool) -> Self {
        self.or_opt = or_opt;
        self
    }

    /// Sets the guided local search penalty coefficient.
    pub fn with_lambda_coefficient(mut self, coefficient: f64) -> Self {
        self.lambda_coefficient = coefficient;
        self
    }

    /// Caps the number of penalty rounds.
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the start index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.time_limit, Duration::from_secs(10));
        assert_eq!(c.strategy, LocalSearchStrategy::GuidedLocalSearch);
        assert!(c.or_opt);
        assert_eq!(c.max_iterations, None);
        assert_eq!(c.start, 0);
    }

    #[test]
    fn test_json_partial() {
        let c: SolverConfig =
            serde_json::from_str(r#"{"strategy":"two_opt","max_iterations":50}"#).expect("valid");
        assert_eq!(c.strategy, LocalSearchStrategy::TwoOpt);
        assert_eq!(c.max_iterations, Some(50));
        assert_eq!(c.time_limit, DEFAULT_TIME_LIMIT);
    }

    #[test]
    fn test_builders() {
        let c = SolverConfig::default()
            .with_or_opt(false)
            .with_max_iterations(7)
            .with_lambda_coefficient(0.3)
            .with_start(2);
        assert!(!c.or_opt);
        assert_eq!(c.max_iterations, Some(7));
        assert_eq!(c.lambda_coefficient, 0.3);
        assert_eq!(c.start, 2);
    }
}
