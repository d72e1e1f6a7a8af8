//! Domain model types for single-depot tours.
//!
//! Points with geographic coordinates and a depot/stop role, and the closed
//! tour that the solver produces.

mod point;
mod tour;

pub use point::{validate_points, Coordinate, Point, Role};
pub use tour::Tour;
