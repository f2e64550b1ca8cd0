// Copyright (c) 2025 - Cowboy AI, Inc.
//! Geographic Value Objects with Validation Invariants
//!
//! A hazard's [`Location`] is a center point plus a bounding box keyed by
//! the four cardinal directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{parse_member, validate_bounding_box};
use crate::errors::{DomainError, DomainResult};

/// Latitude/longitude pair in decimal degrees
///
/// Carries no validation of its own; bounds are checked where the
/// coordinate is used, see [`Location::new`].
///
/// The JSON form only round-trips finite values: `serde_json` writes NaN
/// and infinities as `null`, which does not decode back into an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Side of a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl CardinalDirection {
    /// Every direction, in bounding-box order
    pub const ALL: [CardinalDirection; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Get the capitalized direction name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    /// Parse from a direction name, ignoring case
    pub fn parse(s: &str) -> DomainResult<Self> {
        parse_member("cardinal direction", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CardinalDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hazard location: center point plus bounding box
///
/// Invariants:
/// - North and south latitudes strictly inside (-90, 90)
/// - East longitude below 180
/// - West longitude above -180
///
/// The longitude checks are deliberately one-sided, matching the bounds
/// the catalog has always stored.
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::{CardinalDirection, GeoCoordinate, Location};
///
/// let location = Location::new(
///     GeoCoordinate::new(0.0, 0.0),
///     GeoCoordinate::new(45.0, 0.0),
///     GeoCoordinate::new(-45.0, 0.0),
///     GeoCoordinate::new(0.0, 90.0),
///     GeoCoordinate::new(0.0, -90.0),
/// )
/// .unwrap();
/// assert_eq!(location.bound(CardinalDirection::North).latitude(), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationParts", into = "LocationParts")]
pub struct Location {
    center: GeoCoordinate,
    north: GeoCoordinate,
    south: GeoCoordinate,
    east: GeoCoordinate,
    west: GeoCoordinate,
}

impl Location {
    /// Create a new location with validation
    ///
    /// Fails with [`DomainError::InvalidLocation`] naming the first bound
    /// (in North, South, East, West order) that is out of range.
    pub fn new(
        center: GeoCoordinate,
        north: GeoCoordinate,
        south: GeoCoordinate,
        east: GeoCoordinate,
        west: GeoCoordinate,
    ) -> DomainResult<Self> {
        if let Err(err) = validate_bounding_box(&north, &south, &east, &west) {
            tracing::debug!("Rejected location centered at {}: {}", center, err);
            return Err(err);
        }

        Ok(Self {
            center,
            north,
            south,
            east,
            west,
        })
    }

    pub fn center(&self) -> GeoCoordinate {
        self.center
    }

    /// Bounding-box coordinate for a direction
    pub fn bound(&self, direction: CardinalDirection) -> GeoCoordinate {
        match direction {
            CardinalDirection::North => self.north,
            CardinalDirection::South => self.south,
            CardinalDirection::East => self.east,
            CardinalDirection::West => self.west,
        }
    }

    /// Bounding-box coordinate looked up by direction name ("North", ...)
    pub fn bound_named(&self, name: &str) -> DomainResult<GeoCoordinate> {
        Ok(self.bound(CardinalDirection::parse(name)?))
    }

    /// All four bounds in North, South, East, West order
    pub fn bounding_box(&self) -> impl Iterator<Item = (CardinalDirection, GeoCoordinate)> + '_ {
        CardinalDirection::ALL
            .into_iter()
            .map(move |direction| (direction, self.bound(direction)))
    }
}

/// Wire shape of a [`Location`], validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocationParts {
    center: GeoCoordinate,
    north: GeoCoordinate,
    south: GeoCoordinate,
    east: GeoCoordinate,
    west: GeoCoordinate,
}

impl TryFrom<LocationParts> for Location {
    type Error = DomainError;

    fn try_from(parts: LocationParts) -> Result<Self, Self::Error> {
        Self::new(parts.center, parts.north, parts.south, parts.east, parts.west)
    }
}

impl From<Location> for LocationParts {
    fn from(location: Location) -> Self {
        Self {
            center: location.center,
            north: location.north,
            south: location.south,
            east: location.east,
            west: location.west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> GeoCoordinate {
        GeoCoordinate::new(0.0, 0.0)
    }

    fn build(north: f64, south: f64, east: f64, west: f64) -> DomainResult<Location> {
        Location::new(
            origin(),
            GeoCoordinate::new(north, 0.0),
            GeoCoordinate::new(south, 0.0),
            GeoCoordinate::new(0.0, east),
            GeoCoordinate::new(0.0, west),
        )
    }

    #[test]
    fn test_valid_location() {
        let location = build(45.0, -45.0, 90.0, -90.0).unwrap();
        assert_eq!(location.center(), origin());
        assert_eq!(location.bound(CardinalDirection::South).latitude(), -45.0);
        assert_eq!(location.bound(CardinalDirection::East).longitude(), 90.0);
    }

    #[test]
    fn test_latitude_boundaries_rejected() {
        assert_eq!(
            build(90.0, -45.0, 90.0, -90.0),
            Err(DomainError::InvalidLocation {
                field: CardinalDirection::North,
                value: 90.0,
            })
        );
        assert_eq!(
            build(45.0, -90.0, 90.0, -90.0),
            Err(DomainError::InvalidLocation {
                field: CardinalDirection::South,
                value: -90.0,
            })
        );
    }

    #[test]
    fn test_longitude_boundaries() {
        assert!(build(45.0, -45.0, 180.0, -90.0).is_err());
        assert!(build(45.0, -45.0, 90.0, -180.0).is_err());
        // One-sided checks: no lower bound on east, no upper bound on west
        assert!(build(45.0, -45.0, -300.0, 300.0).is_ok());
    }

    #[test]
    fn test_center_is_not_validated() {
        let location = Location::new(
            GeoCoordinate::new(1000.0, -1000.0),
            GeoCoordinate::new(10.0, 0.0),
            GeoCoordinate::new(-10.0, 0.0),
            GeoCoordinate::new(0.0, 10.0),
            GeoCoordinate::new(0.0, -10.0),
        );
        assert!(location.is_ok());
    }

    #[test]
    fn test_json_form_requires_finite_coordinates() {
        let location = build(45.0, -45.0, f64::NEG_INFINITY, -90.0).unwrap();

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["east"]["longitude"], serde_json::Value::Null);
        assert!(serde_json::from_value::<Location>(json).is_err());

        let finite = build(45.0, -45.0, 90.0, -90.0).unwrap();
        let json = serde_json::to_value(&finite).unwrap();
        assert_eq!(serde_json::from_value::<Location>(json).unwrap(), finite);
    }

    #[test]
    fn test_bound_named() {
        let location = build(45.0, -45.0, 90.0, -90.0).unwrap();
        assert_eq!(location.bound_named("North").unwrap().latitude(), 45.0);
        assert_eq!(location.bound_named("west").unwrap().longitude(), -90.0);
        assert!(matches!(
            location.bound_named("Up"),
            Err(DomainError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_bounding_box_order() {
        let location = build(45.0, -45.0, 90.0, -90.0).unwrap();
        let directions: Vec<_> = location.bounding_box().map(|(d, _)| d).collect();
        assert_eq!(directions, CardinalDirection::ALL.to_vec());
    }
}
