//! Tour solver: construction, local search and guided local search.
//!
//! - [`TourSolver`] — Time-bounded solve over a [`CostMatrix`](crate::distance::CostMatrix)
//! - [`SolverConfig`] — Time budget, strategy and search parameters
//! - [`EdgePenalties`] / [`PenalizedCost`] — Guided local search state

mod config;
mod gls;
mod tsp;

pub use config::{LocalSearchStrategy, SolverConfig, DEFAULT_LAMBDA_COEFFICIENT, DEFAULT_TIME_LIMIT};
pub use gls::{penalty_factor, EdgePenalties, PenalizedCost};
pub use tsp::{SearchStats, Termination, TourSolution, TourSolver};
