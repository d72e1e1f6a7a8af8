//! Guided local search penalties.
//!
//! # Algorithm
//!
//! Each arc (i, j) is a feature with cost c(i, j) and penalty p(i, j).
//! At a local optimum, the arcs of the tour with maximal utility
//!
//! ```text
//! util(i, j) = c(i, j) / (1 + p(i, j))
//! ```
//!
//! have their penalty incremented. Moves are then evaluated on the
//! augmented cost `c(i, j) + λ · p(i, j)`, which steers descent away from
//! arcs that keep reappearing in local optima.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//! application to the traveling salesman problem", *European Journal of
//! Operational Research* 113(2), 469-499.

use crate::distance::{max_arc_cost, ArcCost, CostMatrix};

/// Per-arc penalty counters, owned by a single solve.
#[derive(Debug, Clone)]
pub struct EdgePenalties {
    counts: Vec<u32>,
    size: usize,
}

impl EdgePenalties {
    /// Creates zeroed penalties for `size` points.
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size * size],
            size,
        }
    }

    /// Penalty count of arc `from → to`.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.counts[from * self.size + to]
    }

    /// Sum of all penalty counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Penalises the maximal-utility arcs of the closed tour.
    ///
    /// Arcs are penalised in both directions. Returns `false` if the
    /// maximal utility is zero, in which case nothing changes.
    pub fn penalize(&mut self, route: &[usize], depot: usize, costs: &CostMatrix) -> bool {
        let arcs = closed_arcs(route, depot);

        let mut best: Option<(i64, u32)> = None;
        for &(a, b) in &arcs {
            let c = costs.get(a, b);
            let p = self.get(a, b);
            best = match best {
                Some((bc, bp)) if !utility_greater(c, p, bc, bp) => Some((bc, bp)),
                _ => Some((c, p)),
            };
        }

        let (best_cost, best_penalty) = match best {
            Some(b) if b.0 > 0 => b,
            _ => return false,
        };

        for &(a, b) in &arcs {
            let c = costs.get(a, b);
            let p = self.get(a, b);
            if !utility_greater(best_cost, best_penalty, c, p) {
                self.bump(a, b);
                if a != b {
                    self.bump(b, a);
                }
            }
        }
        true
    }

    fn bump(&mut self, from: usize, to: usize) {
        let slot = &mut self.counts[from * self.size + to];
        *slot = slot.saturating_add(1);
    }
}

/// `c1 / (1 + p1) > c2 / (1 + p2)`, compared exactly.
fn utility_greater(c1: i64, p1: u32, c2: i64, p2: u32) -> bool {
    i128::from(c1) * (1 + i128::from(p2)) > i128::from(c2) * (1 + i128::from(p1))
}

fn closed_arcs(route: &[usize], depot: usize) -> Vec<(usize, usize)> {
    let mut arcs = Vec::with_capacity(route.len() + 1);
    let mut prev = depot;
    for &p in route {
        arcs.push((prev, p));
        prev = p;
    }
    arcs.push((prev, depot));
    arcs
}

/// Arc costs augmented with `λ · penalty`.
///
/// Used only for move evaluation; reported costs always come from the
/// underlying matrix. Augmented costs are clamped to [`max_arc_cost`] so
/// move deltas stay within `i64`.
#[derive(Debug, Clone, Copy)]
pub struct PenalizedCost<'a> {
    base: &'a CostMatrix,
    penalties: &'a EdgePenalties,
    lambda: i64,
    cap: i64,
}

impl<'a> PenalizedCost<'a> {
    /// Creates a penalised view over `base`.
    pub fn new(base: &'a CostMatrix, penalties: &'a EdgePenalties, lambda: i64) -> Self {
        Self {
            base,
            penalties,
            lambda,
            cap: max_arc_cost(base.size()),
        }
    }
}

impl ArcCost for PenalizedCost<'_> {
    fn cost(&self, from: usize, to: usize) -> i64 {
        let penalty = self
            .lambda
            .saturating_mul(i64::from(self.penalties.get(from, to)));
        self.base
            .get(from, to)
            .saturating_add(penalty)
            .min(self.cap)
    }

    fn is_symmetric(&self) -> bool {
        self.base.is_symmetric()
    }
}

/// Penalty factor λ = max(1, coef × cost / n), truncated.
pub fn penalty_factor(coefficient: f64, local_optimum_cost: i64, n: usize) -> i64 {
    if n == 0 {
        return 1;
    }
    let raw = (coefficient * local_optimum_cost as f64 / n as f64) as i64;
    raw.max(1)
}
