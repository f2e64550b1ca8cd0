// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! Every value object in this crate delegates its construction check to one
//! of these functions. All functions are pure (no side effects) and return
//! the specific [`DomainError`] describing the first violated rule.
//!
//! # Known Looseness
//!
//! The rules intentionally mirror what the catalog has always accepted:
//! - dates cap the day at 31 with no per-month or leap-year check
//! - east longitudes have no lower bound, west longitudes no upper bound
//! - image references are checked syntactically only

use crate::domain::{CardinalDirection, GeoCoordinate};
use crate::errors::DomainError;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), DomainError>;

/// Resolve a member of a closed enumeration by name, ignoring ASCII case
///
/// `members` must list every variant; `name` gives each variant's canonical
/// spelling.
pub(crate) fn parse_member<T: Copy>(
    type_name: &'static str,
    given: &str,
    members: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, DomainError> {
    members
        .iter()
        .copied()
        .find(|member| name(member).eq_ignore_ascii_case(given))
        .ok_or_else(|| DomainError::InvalidEnumValue {
            type_name,
            given: given.to_string(),
            valid_members: members.iter().map(name).collect(),
        })
}

/// Validate a `YYYYMMDD` date string
///
/// # Rules
/// - Exactly 8 characters, all ASCII digits
/// - Month (characters 5-6) in 1..=12
/// - Day (characters 7-8) in 1..=31
pub fn validate_date_string(raw: &str) -> ValidationResult {
    let invalid = || DomainError::InvalidDate {
        raw: raw.to_string(),
    };

    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // All bytes are ASCII digits, so these slices are on char boundaries.
    let month: u32 = raw[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = raw[6..8].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    Ok(())
}

/// Split a path into its stem and extension
///
/// The extension is the last `.`-suffix of the final path segment. Leading
/// dots of that segment do not start an extension, so `/a/.hidden` has none.
pub fn split_extension(raw: &str) -> (&str, &str) {
    let segment_start = raw.rfind('/').map(|i| i + 1).unwrap_or(0);
    let segment = &raw[segment_start..];
    let leading_dots = segment.len() - segment.trim_start_matches('.').len();

    match segment[leading_dots..].rfind('.') {
        Some(dot) => raw.split_at(segment_start + leading_dots + dot),
        None => (raw, ""),
    }
}

/// Validate an image reference against an allowed extension list
///
/// # Rules
/// - The path before the extension starts with `/`
/// - The extension (including its dot) is one of `allowed_extensions`,
///   compared case-sensitively
pub fn validate_image_reference<S: AsRef<str>>(
    raw: &str,
    allowed_extensions: &[S],
) -> ValidationResult {
    let (path, extension) = split_extension(raw);

    let allowed = allowed_extensions
        .iter()
        .any(|allowed| allowed.as_ref() == extension);

    if !path.starts_with('/') || !allowed {
        return Err(DomainError::InvalidImageReference {
            raw: raw.to_string(),
        });
    }

    Ok(())
}

/// Validate a bounding-box latitude lies strictly inside (-90, 90)
pub fn validate_latitude(direction: CardinalDirection, latitude: f64) -> ValidationResult {
    if latitude > -90.0 && latitude < 90.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidLocation {
            field: direction,
            value: latitude,
        })
    }
}

/// Validate the eastern bound's longitude is below 180
pub fn validate_east_longitude(longitude: f64) -> ValidationResult {
    if longitude < 180.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidLocation {
            field: CardinalDirection::East,
            value: longitude,
        })
    }
}

/// Validate the western bound's longitude is above -180
pub fn validate_west_longitude(longitude: f64) -> ValidationResult {
    if longitude > -180.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidLocation {
            field: CardinalDirection::West,
            value: longitude,
        })
    }
}

/// Composite validation for a bounding box
///
/// Checks run in the order North, South, East, West and the first failure
/// is reported.
pub fn validate_bounding_box(
    north: &GeoCoordinate,
    south: &GeoCoordinate,
    east: &GeoCoordinate,
    west: &GeoCoordinate,
) -> ValidationResult {
    validate_latitude(CardinalDirection::North, north.latitude())?;
    validate_latitude(CardinalDirection::South, south.latitude())?;
    validate_east_longitude(east.longitude())?;
    validate_west_longitude(west.longitude())?;
    Ok(())
}
