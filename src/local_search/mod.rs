//! Local search operators for improving a tour.
//!
//! - [`two_opt`] — 2-opt edge exchange (segment reversal)
//! - [`or_opt`] — Segment relocation (1–3 points)
//!
//! Both are generic over [`ArcCost`] so guided local search can run them on
//! penalised costs.

mod or_opt;
mod two_opt;

pub use or_opt::{or_opt_improve, MAX_SEGMENT};
pub use two_opt::two_opt_improve;

use crate::distance::ArcCost;

/// Computes the total cost: depot → route[0] → ... → route[n-1] → depot.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::CostMatrix;
/// use depot_tour::local_search::route_cost;
///
/// let m = CostMatrix::from_data(2, vec![0, 7, 7, 0]).unwrap();
/// assert_eq!(route_cost(&[1], 0, &m), 14);
/// assert_eq!(route_cost(&[], 0, &m), 0);
/// ```
pub fn route_cost<C: ArcCost + ?Sized>(route: &[usize], depot: usize, costs: &C) -> i64 {
    if route.is_empty() {
        return 0;
    }
    let mut cost = costs.cost(depot, route[0]);
    for w in route.windows(2) {
        cost += costs.cost(w[0], w[1]);
    }
    cost += costs.cost(route[route.len() - 1], depot);
    cost
}
