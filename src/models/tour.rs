//! Closed tour type.

use serde::{Deserialize, Serialize};

/// A closed tour: `start → stops… → start`.
///
/// The full sequence has length N+1; the first and last elements are the
/// start index and the interior is a permutation of all other indices.
///
/// # Examples
///
/// ```
/// use depot_tour::models::Tour;
///
/// let tour = Tour::from_stops(0, vec![2, 1, 3]);
/// assert_eq!(tour.sequence(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.stops(), &[2, 1, 3]);
/// assert_eq!(tour.num_points(), 4);
/// assert!(tour.is_valid(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Builds a tour from the interior visiting order.
    pub fn from_stops(start: usize, stops: Vec<usize>) -> Self {
        let mut sequence = Vec::with_capacity(stops.len() + 2);
        sequence.push(start);
        sequence.extend(stops);
        sequence.push(start);
        Self { sequence }
    }

    /// The degenerate tour `[start, start]`.
    pub fn trivial(start: usize) -> Self {
        Self::from_stops(start, Vec::new())
    }

    /// Full sequence including the start at both ends.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Start (and end) index.
    pub fn start(&self) -> usize {
        self.sequence[0]
    }

    /// Interior visiting order (start excluded).
    pub fn stops(&self) -> &[usize] {
        &self.sequence[1..self.sequence.len() - 1]
    }

    /// Number of distinct points covered (N).
    pub fn num_points(&self) -> usize {
        self.sequence.len() - 1
    }

    /// Consecutive `(from, to)` pairs along the tour.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if this is a valid tour over `n` points.
    ///
    /// The start must appear only at both ends and every other index in
    /// `0..n` exactly once in between.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.sequence.len() != n + 1 {
            return false;
        }
        let start = self.start();
        if start >= n || self.sequence[n] != start {
            return false;
        }
        let mut seen = vec![false; n];
        seen[start] = true;
        for &p in self.stops() {
            if p >= n || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial() {
        let t = Tour::trivial(0);
        assert_eq!(t.sequence(), &[0, 0]);
        assert!(t.stops().is_empty());
        assert_eq!(t.num_points(), 1);
        assert!(t.is_valid(1));
    }

    #[test]
    fn test_legs() {
        let t = Tour::from_stops(0, vec![1, 2]);
        let legs: Vec<_> = t.legs().collect();
        assert_eq!(legs, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_non_zero_start() {
        let t = Tour::from_stops(2, vec![0, 1]);
        assert_eq!(t.start(), 2);
        assert!(t.is_valid(3));
    }

    #[test]
    fn test_invalid_tours() {
        assert!(!Tour::from_stops(0, vec![1, 1]).is_valid(3));
        assert!(!Tour::from_stops(0, vec![1]).is_valid(3));
        assert!(!Tour::from_stops(0, vec![1, 0]).is_valid(3));
        assert!(!Tour::from_stops(0, vec![1, 5]).is_valid(3));
        assert!(!Tour::trivial(0).is_valid(0));
    }
}
