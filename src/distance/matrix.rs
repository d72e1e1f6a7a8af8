//! Dense integer cost matrix.

use serde::{Deserialize, Serialize};

use super::haversine::{great_circle_distance, road_distance, to_meters};
use super::ArcCost;
use crate::error::{Result, TourError};
use crate::models::{Point, Tour};

/// A dense n×n cost matrix in whole meters, stored in row-major order.
///
/// Built either from geographic points (haversine × road factor, truncated
/// to meters) or from explicit data.
///
/// # Examples
///
/// ```
/// use depot_tour::models::Point;
/// use depot_tour::distance::CostMatrix;
///
/// let points = vec![
///     Point::depot(0.0, 0.0),
///     Point::stop(1, 0.0, 1.0),
/// ];
/// let m = CostMatrix::from_points(&points).unwrap();
/// assert_eq!(m.get(0, 1), 150113);
/// assert_eq!(m.get(1, 1), 0);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData", into = "MatrixData")]
pub struct CostMatrix {
    data: Vec<i64>,
    size: usize,
    symmetric: bool,
}

/// Serialized form: `{"size": n, "data": [...]}`, validated on the way in.
#[derive(Serialize, Deserialize)]
struct MatrixData {
    size: usize,
    data: Vec<i64>,
}

impl TryFrom<MatrixData> for CostMatrix {
    type Error = String;

    fn try_from(raw: MatrixData) -> std::result::Result<Self, Self::Error> {
        let size = raw.size;
        Self::from_data(size, raw.data).ok_or_else(|| {
            format!(
                "invalid {size}x{size} cost matrix: needs size² entries in 0..={}, zero diagonal",
                max_arc_cost(size)
            )
        })
    }
}

impl From<CostMatrix> for MatrixData {
    fn from(m: CostMatrix) -> Self {
        Self {
            size: m.size,
            data: m.data,
        }
    }
}

/// Largest arc cost accepted for an `size`-point matrix.
///
/// Any sum of up to `4 × (size + 2)` such arcs fits in `i64`, which covers
/// tour costs and every move delta, penalised or not.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::max_arc_cost;
///
/// assert!(max_arc_cost(10) > 1_000_000_000_000);
/// assert!(max_arc_cost(100) < max_arc_cost(10));
/// ```
pub fn max_arc_cost(size: usize) -> i64 {
    let terms = (size as i64).saturating_add(2).saturating_mul(4);
    i64::MAX / terms
}

impl CostMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
            symmetric: true,
        }
    }

    /// Computes the road-distance matrix for the given points.
    ///
    /// Diagonal entries are forced to zero. The upper triangle is computed
    /// and mirrored, so the result is exactly symmetric.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidCoordinate`] if any coordinate is non-finite or
    /// out of range; nothing is computed in that case.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        for (i, p) in points.iter().enumerate() {
            let c = p.coordinate();
            if !c.is_valid() {
                return Err(TourError::InvalidCoordinate {
                    index: i,
                    latitude: c.latitude,
                    longitude: c.longitude,
                });
            }
        }

        let n = points.len();
        let mut m = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let km = road_distance(great_circle_distance(
                    points[i].coordinate(),
                    points[j].coordinate(),
                ));
                let cost = to_meters(km);
                m.data[i * n + j] = cost;
                m.data[j * n + i] = cost;
            }
        }
        Ok(m)
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`, if any
    /// entry is negative or above [`max_arc_cost`], or if a diagonal entry is
    /// non-zero.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if size.checked_mul(size) != Some(data.len()) {
            return None;
        }
        let limit = max_arc_cost(size);
        if data.iter().any(|&c| !(0..=limit).contains(&c)) {
            return None;
        }
        if (0..size).any(|i| data[i * size + i] != 0) {
            return None;
        }
        let mut m = Self {
            data,
            size,
            symmetric: false,
        };
        m.symmetric = m.check_symmetric();
        Some(m)
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Sum of the matrix entries along a tour.
    ///
    /// Computed from scratch, independent of any solver bookkeeping.
    pub fn tour_cost(&self, tour: &Tour) -> i64 {
        tour.legs().map(|(a, b)| self.get(a, b)).sum()
    }

    fn check_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

impl ArcCost for CostMatrix {
    fn cost(&self, from: usize, to: usize) -> i64 {
        self.get(from, to)
    }

    fn is_symmetric(&self) -> bool {
        self.symmetric
    }
}
