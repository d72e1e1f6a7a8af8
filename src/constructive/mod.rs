//! Constructive heuristics for building an initial tour.
//!
//! - [`path_cheapest_arc`] — Greedy cheapest-arc path extension, O(n²)

mod cheapest_arc;

pub use cheapest_arc::path_cheapest_arc;
