//! Great-circle and road distance estimates.
//!
//! # Algorithm
//!
//! Haversine formula on a sphere of radius 6371 km:
//!
//! ```text
//! h = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · asin(√h)
//! ```
//!
//! Road distance is the great-circle distance scaled by a fixed detour
//! factor, then converted to whole meters by truncation.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Empirical road/great-circle ratio for mountainous, winding road networks.
pub const ROAD_FACTOR: f64 = 1.35;

/// Kilometers to cost units (meters).
pub const UNITS_PER_KM: f64 = 1000.0;

/// Great-circle distance in kilometers between two coordinates.
///
/// # Examples
///
/// ```
/// use depot_tour::models::Coordinate;
/// use depot_tour::distance::great_circle_distance;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// assert!((great_circle_distance(a, b) - 111.19492664455873).abs() < 1e-9);
/// assert_eq!(great_circle_distance(a, a), 0.0);
/// ```
pub fn great_circle_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = b.longitude.to_radians() - a.longitude.to_radians();

    let s_lat = (d_lat / 2.0).sin();
    let s_lon = (d_lon / 2.0).sin();
    let h = s_lat * s_lat + lat1.cos() * lat2.cos() * (s_lon * s_lon);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Converts a great-circle distance into an estimated road distance.
pub fn road_distance(great_circle_km: f64) -> f64 {
    great_circle_km * ROAD_FACTOR
}

/// Converts kilometers into integer cost units, truncating toward zero.
///
/// Truncation (not rounding) keeps costs reproducible against reference
/// matrices.
///
/// # Examples
///
/// ```
/// use depot_tour::distance::to_meters;
///
/// assert_eq!(to_meters(600.4526), 600452);
/// ```
pub fn to_meters(km: f64) -> i64 {
    (km * UNITS_PER_KM) as i64
}
