//! Per-leg breakdown and fuel estimate for a solved tour.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::{CostMatrix, UNITS_PER_KM};
use crate::models::Point;
use crate::solver::TourSolution;

/// Fuel consumption and price used for cost estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    /// Consumption in liters per 100 km.
    pub liters_per_100km: f64,
    /// Price per liter.
    pub price_per_liter: f64,
}

impl Default for FuelProfile {
    /// Commercial van on diesel.
    fn default() -> Self {
        Self {
            liters_per_100km: 12.0,
            price_per_liter: 43.50,
        }
    }
}

/// One leg of the tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Origin index.
    pub from: usize,
    /// Destination index.
    pub to: usize,
    /// Origin label.
    pub from_label: String,
    /// Destination label.
    pub to_label: String,
    /// Leg distance in meters, straight from the matrix.
    pub meters: i64,
}

impl Leg {
    /// Leg distance in kilometers.
    pub fn km(&self) -> f64 {
        self.meters as f64 / UNITS_PER_KM
    }
}

/// Readable summary of a solution.
///
/// # Examples
///
/// ```
/// use depot_tour::dataset;
/// use depot_tour::report::{FuelProfile, TourReport};
/// use depot_tour::solver::{SolverConfig, TourSolver};
///
/// let points = dataset::turkey();
/// let solver = TourSolver::new(SolverConfig::default().with_max_iterations(20));
/// let (matrix, solution) = solver.solve_points(&points).unwrap();
/// let report = TourReport::new(&points, &matrix, &solution, FuelProfile::default());
/// assert_eq!(report.legs.len(), 10);
/// assert_eq!(report.total_meters, solution.cost);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourReport {
    /// Full visiting order, start at both ends.
    pub sequence: Vec<usize>,
    /// Legs in tour order.
    pub legs: Vec<Leg>,
    /// Total distance in meters.
    pub total_meters: i64,
    /// Total distance in kilometers.
    pub total_km: f64,
    /// Estimated fuel in liters.
    pub fuel_liters: f64,
    /// Estimated fuel cost.
    pub fuel_cost: f64,
    /// Fuel assumptions used.
    pub fuel: FuelProfile,
}

impl TourReport {
    /// Builds the report. Labels fall back to `#index` for unknown points.
    pub fn new(
        points: &[Point],
        matrix: &CostMatrix,
        solution: &TourSolution,
        fuel: FuelProfile,
    ) -> Self {
        let label = |i: usize| {
            points
                .get(i)
                .map(Point::label)
                .unwrap_or_else(|| format!("#{i}"))
        };

        let legs: Vec<Leg> = solution
            .tour
            .legs()
            .map(|(from, to)| Leg {
                from,
                to,
                from_label: label(from),
                to_label: label(to),
                meters: matrix.get(from, to),
            })
            .collect();

        let total_meters = solution.cost;
        let total_km = total_meters as f64 / UNITS_PER_KM;
        let fuel_liters = total_km * fuel.liters_per_100km / 100.0;
        let fuel_cost = fuel_liters * fuel.price_per_liter;

        Self {
            sequence: solution.tour.sequence().to_vec(),
            legs,
            total_meters,
            total_km,
            fuel_liters,
            fuel_cost,
            fuel,
        }
    }
}

impl fmt::Display for TourReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route ({} legs)", self.legs.len())?;
        for (i, leg) in self.legs.iter().enumerate() {
            writeln!(
                f,
                "{:>3}. {} -> {}  {:>8.1} km",
                i + 1,
                leg.from_label,
                leg.to_label,
                leg.km()
            )?;
        }
        writeln!(f, "Total distance : {:>10.1} km", self.total_km)?;
        writeln!(
            f,
            "Estimated fuel : {:>10.1} l ({} l/100km)",
            self.fuel_liters, self.fuel.liters_per_100km
        )?;
        write!(
            f,
            "Fuel cost      : {:>10.0} ({:.2}/l)",
            self.fuel_cost, self.fuel.price_per_liter
        )
    }
}
