//! Time-bounded tour solver.
//!
//! # Algorithm
//!
//! 1. Construction: path-cheapest-arc from the start index.
//! 2. Improvement: plain 2-opt descent, or under guided local search a
//!    2-opt (plus Or-opt) descent whose local optima have their arcs
//!    penalised before descent resumes on the augmented costs.
//! 3. Termination: time budget, iteration cap, or a local optimum that no
//!    penalty update can change.
//!
//! The best tour by true cost seen at any local optimum is returned.

use std::time::Duration;

use serde::Serialize;

use super::config::{LocalSearchStrategy, SolverConfig};
use super::gls::{penalty_factor, EdgePenalties, PenalizedCost};
use crate::constructive::path_cheapest_arc;
use crate::deadline::Deadline;
use crate::distance::{ArcCost, CostMatrix};
use crate::error::{Result, TourError};
use crate::local_search::{or_opt_improve, route_cost, two_opt_improve};
use crate::models::{validate_points, Point, Tour};

/// Why the improvement phase stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// No improving move and no penalty update possible.
    LocalOptimum,
    /// The wall-clock budget ran out.
    TimeLimit,
    /// The configured number of penalty rounds was reached.
    IterationLimit,
}

/// Counters collected during one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStats {
    /// Cost of the constructed tour.
    pub construction_cost: i64,
    /// Guided local search penalty rounds run.
    pub iterations: u64,
    /// Number of times a new best tour was found after construction.
    pub improvements: u64,
    /// True cost of the tour the search held when it stopped; may exceed
    /// the returned cost under guided local search.
    pub last_cost: i64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Why the search stopped.
    pub termination: Termination,
}

/// A solved tour with its cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSolution {
    /// The closed tour.
    pub tour: Tour,
    /// Sum of matrix entries along the tour.
    pub cost: i64,
    /// Search statistics.
    pub stats: SearchStats,
}

/// Finds a short closed tour through every point of a cost matrix.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::CostMatrix;
/// use depot_tour::solver::{SolverConfig, TourSolver};
///
/// let m = CostMatrix::from_data(3, vec![
///        0, 3000, 4000,
///     3000,    0, 5000,
///     4000, 5000,    0,
/// ]).unwrap();
/// let solver = TourSolver::new(SolverConfig::default().with_max_iterations(10));
/// let solution = solver.solve(&m).unwrap();
/// assert_eq!(solution.cost, 12000);
/// assert_eq!(solution.tour.sequence().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TourSolver {
    config: SolverConfig,
}

impl TourSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates `points`, builds their cost matrix and solves it.
    ///
    /// # Errors
    ///
    /// Any error from [`validate_points`], [`CostMatrix::from_points`] or
    /// [`TourSolver::solve`].
    pub fn solve_points(&self, points: &[Point]) -> Result<(CostMatrix, TourSolution)> {
        validate_points(points)?;
        let matrix = CostMatrix::from_points(points)?;
        let solution = self.solve(&matrix)?;
        Ok((matrix, solution))
    }

    /// Solves the tour over `matrix`, starting and ending at the configured
    /// start index.
    ///
    /// # Errors
    ///
    /// - [`TourError::Infeasible`] if the matrix is empty or the start index
    ///   is out of range.
    /// - [`TourError::Timeout`] if the budget runs out before construction
    ///   completes.
    pub fn solve(&self, matrix: &CostMatrix) -> Result<TourSolution> {
        let n = matrix.size();
        let start = self.config.start;
        if n == 0 {
            return Err(TourError::Infeasible("no points to visit".into()));
        }
        if start >= n {
            return Err(TourError::Infeasible(format!(
                "start index {start} out of range for {n} points"
            )));
        }

        let deadline = Deadline::after(self.config.time_limit);

        if n == 1 {
            return Ok(TourSolution {
                tour: Tour::trivial(start),
                cost: 0,
                stats: SearchStats {
                    construction_cost: 0,
                    iterations: 0,
                    improvements: 0,
                    last_cost: 0,
                    elapsed: deadline.elapsed(),
                    termination: Termination::LocalOptimum,
                },
            });
        }

        let stops = path_cheapest_arc(matrix, n, start, &deadline).ok_or(TourError::Timeout {
            budget: self.config.time_limit,
        })?;
        let construction_cost = route_cost(&stops, start, matrix);
        log::info!("solver: construction points={n} cost={construction_cost}");

        let mut search = Search {
            matrix,
            start,
            deadline,
            or_opt: self.config.or_opt,
            best_cost: construction_cost,
            best: stops.clone(),
            last_cost: construction_cost,
            iterations: 0,
            improvements: 0,
        };

        let termination = if stops.len() < 2 {
            Termination::LocalOptimum
        } else {
            match self.config.strategy {
                LocalSearchStrategy::TwoOpt => search.descend_only(stops, false),
                LocalSearchStrategy::GuidedLocalSearch if stops.len() < 3 => {
                    search.descend_only(stops, self.config.or_opt)
                }
                LocalSearchStrategy::GuidedLocalSearch => search.guided(stops, &self.config),
            }
        };

        let tour = Tour::from_stops(start, search.best);
        let cost = matrix.tour_cost(&tour);
        debug_assert_eq!(cost, search.best_cost);

        let stats = SearchStats {
            construction_cost,
            iterations: search.iterations,
            improvements: search.improvements,
            last_cost: search.last_cost,
            elapsed: deadline.elapsed(),
            termination,
        };
        log::info!(
            "solver: done cost={cost} iterations={} termination={:?} elapsed={:?}",
            stats.iterations,
            stats.termination,
            stats.elapsed
        );

        Ok(TourSolution { tour, cost, stats })
    }
}

/// Mutable state of one solve; dropped when the solve returns.
struct Search<'a> {
    matrix: &'a CostMatrix,
    start: usize,
    deadline: Deadline,
    or_opt: bool,
    best: Vec<usize>,
    best_cost: i64,
    last_cost: i64,
    iterations: u64,
    improvements: u64,
}

impl Search<'_> {
    fn descend_only(&mut self, route: Vec<usize>, or_opt: bool) -> Termination {
        let route = self.descend(route, self.matrix, or_opt);
        self.record(route);
        if self.deadline.expired() {
            Termination::TimeLimit
        } else {
            Termination::LocalOptimum
        }
    }

    fn guided(&mut self, route: Vec<usize>, config: &SolverConfig) -> Termination {
        let mut current = self.descend(route, self.matrix, self.or_opt);
        let first_optimum = route_cost(&current, self.start, self.matrix);
        self.record(current.clone());

        let lambda = penalty_factor(
            config.lambda_coefficient,
            first_optimum,
            self.matrix.size(),
        );
        log::debug!("solver.gls: start cost={first_optimum} lambda={lambda}");

        let mut penalties = EdgePenalties::new(self.matrix.size());
        loop {
            if self.deadline.expired() {
                return Termination::TimeLimit;
            }
            if config.max_iterations.is_some_and(|max| self.iterations >= max) {
                return Termination::IterationLimit;
            }
            if !penalties.penalize(&current, self.start, self.matrix) {
                return Termination::LocalOptimum;
            }
            self.iterations += 1;

            let augmented = PenalizedCost::new(self.matrix, &penalties, lambda);
            current = self.descend(current, &augmented, self.or_opt);
            self.record(current.clone());
        }
    }

    /// Alternates 2-opt and, if `or_opt`, Or-opt until neither improves
    /// `costs`.
    fn descend<C: ArcCost + ?Sized>(
        &self,
        route: Vec<usize>,
        costs: &C,
        or_opt: bool,
    ) -> Vec<usize> {
        let mut current = route;
        let mut cost = route_cost(&current, self.start, costs);
        loop {
            let (next, mut next_cost) =
                two_opt_improve(&current, self.start, costs, &self.deadline);
            current = next;
            if or_opt {
                let (next, c) = or_opt_improve(&current, self.start, costs, &self.deadline);
                current = next;
                next_cost = c;
            }
            if next_cost >= cost || self.deadline.expired() {
                break;
            }
            cost = next_cost;
        }
        current
    }

    /// Keeps `route` if it beats the best tour so far by true cost.
    fn record(&mut self, route: Vec<usize>) {
        let cost = route_cost(&route, self.start, self.matrix);
        self.last_cost = cost;
        if cost < self.best_cost {
            log::debug!(
                "solver: new best cost={cost} previous={} iteration={}",
                self.best_cost,
                self.iterations
            );
            self.best_cost = cost;
            self.best = route;
            self.improvements += 1;
        }
    }
}
