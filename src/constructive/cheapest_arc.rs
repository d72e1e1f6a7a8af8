//! Path-cheapest-arc constructive heuristic.
//!
//! Builds the tour greedily: starting from the start node, always extend the
//! path with the unvisited node reached by the cheapest arc from the current
//! path end, then close the cycle back to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::deadline::Deadline;
use crate::distance::ArcCost;

/// Constructs an initial tour using the path-cheapest-arc heuristic.
///
/// Returns the interior visiting order (start excluded), or `None` if the
/// deadline expired before every node was placed. Ties go to the lowest
/// index.
///
/// # Arguments
///
/// * `costs` — Arc costs
/// * `n` — Number of points
/// * `start` — Start/end index
/// * `deadline` — Time budget, checked once per appended node
///
/// # Examples
///
/// ```
/// use depot_tour::distance::CostMatrix;
/// use depot_tour::constructive::path_cheapest_arc;
/// use depot_tour::Deadline;
///
/// // Points on a line at 0, 10, 1, 2 (index order)
/// let m = CostMatrix::from_data(4, vec![
///      0, 10, 1, 2,
///     10,  0, 9, 8,
///      1,  9, 0, 1,
///      2,  8, 1, 0,
/// ]).unwrap();
/// let stops = path_cheapest_arc(&m, 4, 0, &Deadline::unbounded()).unwrap();
/// assert_eq!(stops, vec![2, 3, 1]);
/// ```
pub fn path_cheapest_arc<C: ArcCost + ?Sized>(
    costs: &C,
    n: usize,
    start: usize,
    deadline: &Deadline,
) -> Option<Vec<usize>> {
    if n <= 1 {
        return Some(Vec::new());
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut stops = Vec::with_capacity(n - 1);
    let mut current = start;

    while stops.len() < n - 1 {
        if deadline.expired() {
            return None;
        }

        let mut best: Option<(usize, i64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let c = costs.cost(current, i);
            match best {
                Some((_, bc)) if bc <= c => {}
                _ => best = Some((i, c)),
            }
        }

        match best {
            Some((next, _)) => {
                visited[next] = true;
                stops.push(next);
                current = next;
            }
            None => break,
        }
    }

    Some(stops)
}
