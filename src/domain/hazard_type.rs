// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hazard Type Domain Model
//!
//! The closed set of natural hazard categories the catalog tracks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::parse_member;
use crate::errors::{DomainError, DomainResult};

/// Natural hazard category
///
/// Parses case-insensitively from its member name and always formats as
/// the lowercase name, so `parse(format(h)) == h` for every member.
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::HazardType;
///
/// let hazard = HazardType::parse("Volcanoes").unwrap();
/// assert_eq!(hazard, HazardType::Volcanoes);
/// assert_eq!(HazardType::format(hazard), "volcanoes");
/// assert!(HazardType::parse("tsunami").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HazardType {
    /// Volcanic activity
    Volcanoes,
    /// Seismic activity
    Earthquakes,
}

impl HazardType {
    /// Every member, in declaration order
    pub const ALL: [HazardType; 2] = [Self::Volcanoes, Self::Earthquakes];

    /// Get the canonical lowercase representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volcanoes => "volcanoes",
            Self::Earthquakes => "earthquakes",
        }
    }

    /// Parse from a member name, ignoring case
    pub fn parse(s: &str) -> DomainResult<Self> {
        parse_member("hazard type", s, &Self::ALL, Self::as_str).map_err(|err| {
            tracing::debug!("Rejected hazard type: {}", s);
            err
        })
    }

    /// Format as the lowercase member name
    pub fn format(hazard_type: HazardType) -> String {
        hazard_type.as_str().to_string()
    }
}

impl fmt::Display for HazardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HazardType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HazardType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for HazardType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HazardType> for String {
    fn from(value: HazardType) -> Self {
        HazardType::format(value)
    }
}
