// Copyright (c) 2025 - Cowboy AI, Inc.
//! Satellite Image Product Types
//!
//! Each image type combines a projection (geocoded or orthorectified) with
//! a radar product (backscatter, coherence or interferogram).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::parse_member;
use crate::errors::{DomainError, DomainResult};

/// Satellite image product type
///
/// Same conversion contract as [`HazardType`](super::HazardType): parsing
/// ignores case, formatting is always the lowercase member name.
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::{ImageProduct, ImageType};
///
/// let image_type: ImageType = "ORTHO_COHERENCE".parse().unwrap();
/// assert_eq!(image_type.as_str(), "ortho_coherence");
/// assert_eq!(image_type.product(), ImageProduct::Coherence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageType {
    GeoBackscatter,
    GeoCoherence,
    GeoInterferogram,
    OrthoBackscatter,
    OrthoCoherence,
    OrthoInterferogram,
}

impl ImageType {
    /// Every member, in declaration order
    pub const ALL: [ImageType; 6] = [
        Self::GeoBackscatter,
        Self::GeoCoherence,
        Self::GeoInterferogram,
        Self::OrthoBackscatter,
        Self::OrthoCoherence,
        Self::OrthoInterferogram,
    ];

    /// Get the canonical lowercase representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeoBackscatter => "geo_backscatter",
            Self::GeoCoherence => "geo_coherence",
            Self::GeoInterferogram => "geo_interferogram",
            Self::OrthoBackscatter => "ortho_backscatter",
            Self::OrthoCoherence => "ortho_coherence",
            Self::OrthoInterferogram => "ortho_interferogram",
        }
    }

    /// Parse from a member name, ignoring case
    pub fn parse(s: &str) -> DomainResult<Self> {
        parse_member("image type", s, &Self::ALL, Self::as_str).map_err(|err| {
            tracing::debug!("Rejected image type: {}", s);
            err
        })
    }

    /// Format as the lowercase member name
    pub fn format(image_type: ImageType) -> String {
        image_type.as_str().to_string()
    }

    /// Get the map projection of this product
    pub fn projection(&self) -> ImageProjection {
        match self {
            Self::GeoBackscatter | Self::GeoCoherence | Self::GeoInterferogram => {
                ImageProjection::Geo
            }
            Self::OrthoBackscatter | Self::OrthoCoherence | Self::OrthoInterferogram => {
                ImageProjection::Ortho
            }
        }
    }

    /// Get the radar product this image carries
    pub fn product(&self) -> ImageProduct {
        match self {
            Self::GeoBackscatter | Self::OrthoBackscatter => ImageProduct::Backscatter,
            Self::GeoCoherence | Self::OrthoCoherence => ImageProduct::Coherence,
            Self::GeoInterferogram | Self::OrthoInterferogram => ImageProduct::Interferogram,
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ImageType {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for ImageType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ImageType> for String {
    fn from(value: ImageType) -> Self {
        ImageType::format(value)
    }
}

/// Map projection of an image product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageProjection {
    /// Geocoded
    Geo,
    /// Orthorectified
    Ortho,
}

/// Radar product carried by an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageProduct {
    Backscatter,
    Coherence,
    Interferogram,
}
