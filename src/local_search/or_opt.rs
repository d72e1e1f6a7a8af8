//! Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive points to a different
//! position within the tour, keeping their orientation. Accepts moves that
//! reduce total cost.
//!
//! For each segment size k ∈ {1, 2, 3} and each starting position, computes
//! the cost change from removing the segment and reinserting it at every
//! other position; the best move of a pass is applied.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::route_cost;
use crate::deadline::Deadline;
use crate::distance::ArcCost;

/// Longest segment relocated by one move.
pub const MAX_SEGMENT: usize = 3;

/// Applies Or-opt improvement to a tour given as its interior order.
///
/// Returns the improved sequence and its cost under `costs`. Stops early,
/// with the best sequence so far, once `deadline` expires.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::CostMatrix;
/// use depot_tour::local_search::{or_opt_improve, route_cost};
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
/// let before = route_cost(&[2, 1, 3], 0, &m);
/// let (_, cost) = or_opt_improve(&[2, 1, 3], 0, &m, &Deadline::unbounded());
/// assert!(cost < before);
/// ```
pub fn or_opt_improve<C: ArcCost + ?Sized>(
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

    let mut improved = true;
    while improved && !deadline.expired() {
        improved = false;
        for seg_len in 1..=MAX_SEGMENT.min(current.len()) {
            if try_or_opt_pass(&mut current, depot, costs, seg_len) {
                improved = true;
            }
        }
    }

    let cost = route_cost(&current, depot, costs);
    (current, cost)
}

/// One pass of Or-opt for a given segment length. Returns true if improved.
fn try_or_opt_pass<C: ArcCost + ?Sized>(
    route: &mut Vec<usize>,
    depot: usize,
    costs: &C,
    seg_len: usize,
) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best_delta = 0;
    let mut best_from = 0;
    let mut best_to = 0;

    for from in 0..=(n - seg_len) {
        let prev = if from == 0 { depot } else { route[from - 1] };
        let after = if from + seg_len >= n {
            depot
        } else {
            route[from + seg_len]
        };
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];

        // Old edges prev→seg_first, seg_last→after become prev→after
        let removal_gain =
            costs.cost(prev, seg_first) + costs.cost(seg_last, after) - costs.cost(prev, after);

        // `to` is the original index the segment is inserted in front of
        for to in 0..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }

            let (ins_prev, ins_next) = if to < from {
                let p = if to == 0 { depot } else { route[to - 1] };
                (p, route[to])
            } else {
                let nx = if to >= n { depot } else { route[to] };
                (route[to - 1], nx)
            };

            let insertion_cost = costs.cost(ins_prev, seg_first) + costs.cost(seg_last, ins_next)
                - costs.cost(ins_prev, ins_next);

            let delta = insertion_cost - removal_gain;
            if delta < best_delta {
                best_delta = delta;
                best_from = from;
                best_to = to;
            }
        }
    }

    if best_delta < 0 {
        let segment: Vec<usize> = route.drain(best_from..best_from + seg_len).collect();
        let insert_pos = if best_to > best_from {
            best_to - seg_len
        } else {
            best_to
        };
        for (i, &p) in segment.iter().enumerate() {
            route.insert(insert_pos + i, p);
        }
        true
    } else {
        false
    }
}
