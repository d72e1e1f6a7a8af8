//! 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of edges (i, i+1) and (j, j+1) in a tour, compute the
//! change in cost from reversing the segment between them:
//!
//! ```text
//! delta = c(r[i], r[j]) + c(r[i+1], r[j+1]) - c(r[i], r[i+1]) - c(r[j], r[j+1])
//! ```
//!
//! If delta < 0, reverse the segment [i+1..=j] and accept the improvement.
//! Repeat until no further improvements are found (first-improvement strategy).
//! With asymmetric costs the reversed interior arcs are added to the delta.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::route_cost;
use crate::deadline::Deadline;
use crate::distance::ArcCost;

/// Applies 2-opt improvement to a tour given as its interior order.
///
/// The tour is assumed to start and end at `depot`. Returns the improved
/// sequence and its cost under `costs`. Stops early, with the best sequence
/// so far, once `deadline` expires.
///
/// # Arguments
///
/// * `route` — Ordered point indices (excluding depot)
/// * `depot` — Start/end index
/// * `costs` — Arc costs used to evaluate moves
/// * `deadline` — Time budget, checked once per outer scan position
///
/// # Examples
///
/// ```
/// use depot_tour::distance::CostMatrix;
/// use depot_tour::local_search::two_opt_improve;
/// use depot_tour::Deadline;
///
/// // Points on a line at 0, 1, 2, 3
/// let m = CostMatrix::from_data(4, vec![
///     0, 1, 2, 3,
///     1, 0, 1, 2,
///     2, 1, 0, 1,
///     3, 2, 1, 0,
/// ]).unwrap();
///
/// let (improved, cost) = two_opt_improve(&[1, 3, 2], 0, &m, &Deadline::unbounded());
/// assert_eq!(cost, 6);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn two_opt_improve<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> (Vec<usize>, i64) {
    let mut current = route.to_vec();
    if current.len() < 2 {
        let cost = route_cost(&current, depot, costs);
        return (current, cost);
    }

    let symmetric = costs.is_symmetric();
    let mut improved = true;

    'scan: while improved {
        improved = false;
        let n = current.len();

        for i in 0..n - 1 {
            if deadline.expired() {
                break 'scan;
            }
            for j in i + 1..n {
                let delta = two_opt_delta(&current, depot, costs, i, j, symmetric);
                if delta < 0 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let cost = route_cost(&current, depot, costs);
    (current, cost)
}

/// Computes the cost change from reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - route[i+1] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - route[j-1] - ... - route[i] - next_j-...
fn two_opt_delta<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    i: usize,
    j: usize,
    symmetric: bool,
) -> i64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = costs.cost(prev_i, route[i]) + costs.cost(route[j], next_j);
    let new_cost = costs.cost(prev_i, route[j]) + costs.cost(route[i], next_j);
    let mut delta = new_cost - old_cost;

    if !symmetric {
        for k in i..j {
            delta += costs.cost(route[k + 1], route[k]) - costs.cost(route[k], route[k + 1]);
        }
    }
    delta
}
