//! Distance model: geographic coordinates to an integer cost matrix.
//!
//! Provides haversine great-circle distance, the road-distance correction,
//! and a dense cost matrix in whole meters.

mod haversine;
mod matrix;

pub use haversine::{
    great_circle_distance, road_distance, to_meters, EARTH_RADIUS_KM, ROAD_FACTOR, UNITS_PER_KM,
};
pub use matrix::{max_arc_cost, CostMatrix};

/// Arc costs used during move evaluation.
///
/// Implemented by [`CostMatrix`] for true costs and by the guided local
/// search's penalised view, so the same operators run on either.
pub trait ArcCost {
    /// Cost of travelling from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> i64;

    /// Whether `cost(i, j) == cost(j, i)` holds for all pairs.
    ///
    /// Segment reversal deltas skip the reversed interior when this holds.
    fn is_symmetric(&self) -> bool {
        false
    }
}
