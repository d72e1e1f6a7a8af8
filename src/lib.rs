//! # depot-tour
//!
//! Single-vehicle, single-depot delivery tour optimization: a haversine
//! road-distance cost model and a time-bounded tour solver.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Point, Tour)
//! - [`distance`] — Haversine distance, road correction, integer cost matrix
//! - [`constructive`] — Constructive heuristics (path cheapest arc)
//! - [`local_search`] — Local search operators (2-opt, Or-opt)
//! - [`solver`] — Tour solver with guided local search
//! - [`report`] — Per-leg breakdown and fuel estimate
//! - [`dataset`] — Built-in delivery instance
//!
//! ## Example
//!
//! ```
//! use depot_tour::dataset;
//! use depot_tour::solver::{SolverConfig, TourSolver};
//!
//! let solver = TourSolver::new(SolverConfig::default().with_max_iterations(50));
//! let (matrix, solution) = solver.solve_points(&dataset::turkey()).unwrap();
//! assert_eq!(solution.tour.sequence().len(), 11);
//! assert_eq!(matrix.tour_cost(&solution.tour), solution.cost);
//! ```

pub mod constructive;
pub mod dataset;
pub mod distance;
pub mod local_search;
pub mod models;
pub mod report;
pub mod solver;

mod deadline;
mod error;

pub use deadline::Deadline;
pub use error::{Result, TourError};
