// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Value Object Validation
//!
//! Generates dates, enum spellings and bounding boxes to check that
//! construction accepts exactly the documented input space.

use hazard_catalog::domain::{
    CardinalDirection, Date, GeoCoordinate, HazardType, ImageType, Location,
};
use hazard_catalog::DomainError;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Well-formed `YYYYMMDD` strings
fn valid_date() -> impl Strategy<Value = String> {
    (0u32..=9999, 1u32..=12, 1u32..=31)
        .prop_map(|(year, month, day)| format!("{:04}{:02}{:02}", year, month, day))
}

/// Eight digits with the month or day outside its range
fn out_of_range_date() -> impl Strategy<Value = String> {
    let bad_month = (0u32..=9999, prop_oneof![Just(0u32), 13u32..=99], 1u32..=31);
    let bad_day = (0u32..=9999, 1u32..=12, prop_oneof![Just(0u32), 32u32..=99]);
    prop_oneof![bad_month, bad_day]
        .prop_map(|(year, month, day)| format!("{:04}{:02}{:02}", year, month, day))
}

/// Randomly re-cased spelling of a name
fn recased(name: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
        name.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// Any hazard type paired with a randomly re-cased spelling of its name
fn recased_hazard_type() -> impl Strategy<Value = (HazardType, String)> {
    prop::sample::select(HazardType::ALL.to_vec())
        .prop_flat_map(|member| (Just(member), recased(member.as_str())))
}

fn open_latitude() -> impl Strategy<Value = f64> {
    -89.999f64..89.999
}

fn bounding_box_at(north: f64) -> Result<Location, DomainError> {
    Location::new(
        GeoCoordinate::new(0.0, 0.0),
        GeoCoordinate::new(north, 0.0),
        GeoCoordinate::new(0.0, 0.0),
        GeoCoordinate::new(0.0, 10.0),
        GeoCoordinate::new(0.0, -10.0),
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_dates_round_trip(raw in valid_date()) {
        let date = Date::new(raw.clone());
        prop_assert!(date.is_ok(), "{} should be accepted", raw);
        let date = date.unwrap();
        prop_assert_eq!(date.as_str(), raw.as_str());
    }

    #[test]
    fn prop_out_of_range_dates_rejected(raw in out_of_range_date()) {
        prop_assert_eq!(Date::new(raw.clone()), Err(DomainError::InvalidDate { raw }));
    }

    #[test]
    fn prop_wrong_length_dates_rejected(raw in "[0-9]{0,7}|[0-9]{9,12}") {
        prop_assert!(Date::new(raw).is_err());
    }

    #[test]
    fn prop_non_digit_dates_rejected(raw in "[0-9]{0,7}[^0-9][0-9]{0,7}") {
        prop_assert!(Date::new(raw).is_err());
    }

    #[test]
    fn prop_hazard_type_parse_ignores_case((member, spelled) in recased_hazard_type()) {
        prop_assert_eq!(HazardType::parse(&spelled), Ok(member));
        prop_assert_eq!(HazardType::format(member), spelled.to_ascii_lowercase());
    }

    #[test]
    fn prop_image_type_parse_ignores_case(spelled in recased("ortho_interferogram")) {
        prop_assert_eq!(ImageType::parse(&spelled), Ok(ImageType::OrthoInterferogram));
        prop_assert_eq!(ImageType::format(ImageType::parse(&spelled).unwrap()), "ortho_interferogram");
    }

    #[test]
    fn prop_interior_latitudes_accepted(north in open_latitude()) {
        prop_assert!(bounding_box_at(north).is_ok());
    }

    #[test]
    fn prop_latitudes_at_or_beyond_poles_rejected(excess in 0.0f64..1000.0, south in any::<bool>()) {
        let north = if south { -90.0 - excess } else { 90.0 + excess };
        prop_assert_eq!(
            bounding_box_at(north),
            Err(DomainError::InvalidLocation { field: CardinalDirection::North, value: north })
        );
    }
}
