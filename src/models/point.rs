//! Coordinate and point types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// A geographic coordinate in degrees.
///
/// # Examples
///
/// ```
/// use depot_tour::models::Coordinate;
///
/// let c = Coordinate::new(40.8190, 29.3005);
/// assert!(c.is_valid());
/// assert!(!Coordinate::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No validation is performed.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Role of a point in the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Start and end of the tour.
    Depot,
    /// A delivery point visited exactly once.
    Stop,
}

/// A delivery point (or the depot).
///
/// Point 0 is the depot. Points carry optional display labels that are
/// only used for reporting.
///
/// # Examples
///
/// ```
/// use depot_tour::models::{Point, Role};
///
/// let depot = Point::depot(40.8190, 29.3005);
/// assert_eq!(depot.index(), 0);
/// assert_eq!(depot.role(), Role::Depot);
///
/// let p = Point::stop(1, 39.9708, 32.6227).with_name("Ankara");
/// assert_eq!(p.name(), Some("Ankara"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    index: usize,
    coordinate: Coordinate,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
}

impl Point {
    /// Creates a point with the given role.
    pub fn new(index: usize, latitude: f64, longitude: f64, role: Role) -> Self {
        Self {
            index,
            coordinate: Coordinate::new(latitude, longitude),
            role,
            name: None,
            city: None,
            address: None,
        }
    }

    /// Creates the depot (index 0).
    pub fn depot(latitude: f64, longitude: f64) -> Self {
        Self::new(0, latitude, longitude, Role::Depot)
    }

    /// Creates a delivery stop.
    pub fn stop(index: usize, latitude: f64, longitude: f64) -> Self {
        Self::new(index, latitude, longitude, Role::Stop)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the city label.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the street address label.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Point index (0 = depot).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Geographic coordinate.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Role tag.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.role == Role::Depot
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// City label, if any.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Street address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Best available label: city, then name, then `#index`.
    pub fn label(&self) -> String {
        self.city
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| format!("#{}", self.index))
    }
}

/// Checks that a point list forms a valid instance.
///
/// Requires at least one point, indices `0..N` in order, exactly one depot
/// and the depot at index 0. Coordinates are checked as well.
///
/// # Errors
///
/// [`TourError::Infeasible`] for structural problems,
/// [`TourError::InvalidCoordinate`] for the first bad coordinate.
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.is_empty() {
        return Err(TourError::Infeasible("no points supplied".into()));
    }
    for (i, p) in points.iter().enumerate() {
        if p.index != i {
            return Err(TourError::Infeasible(format!(
                "point at position {i} has index {}",
                p.index
            )));
        }
        if !p.coordinate.is_valid() {
            return Err(TourError::InvalidCoordinate {
                index: i,
                latitude: p.coordinate.latitude,
                longitude: p.coordinate.longitude,
            });
        }
    }
    if !points[0].is_depot() {
        return Err(TourError::Infeasible("point 0 is not the depot".into()));
    }
    let depots = points.iter().filter(|p| p.is_depot()).count();
    if depots != 1 {
        return Err(TourError::Infeasible(format!(
            "expected exactly one depot, found {depots}"
        )));
    }
    Ok(())
}
