// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image/hazard query criteria
//!
//! Only the shape of a filter lives here. Evaluating it against stored
//! images is the job of the query layer.

use serde::{Deserialize, Serialize};

use super::{DateRange, ImageType};

/// Criteria for narrowing image and hazard results
///
/// Each `None` field places no constraint on its dimension, so
/// [`HazardInfoFilter::default`] matches everything.
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::{HazardInfoFilter, ImageType};
///
/// let everything = HazardInfoFilter::default();
/// assert!(everything.is_unconstrained());
///
/// let recent = HazardInfoFilter::default()
///     .with_image_types(vec![ImageType::GeoCoherence])
///     .with_last_n_images(5);
/// assert!(!recent.is_unconstrained());
/// assert_ne!(recent, everything);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardInfoFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satellite_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_type: Option<Vec<ImageType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_n_images: Option<u32>,
}

impl HazardInfoFilter {
    /// Check whether no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.satellite_ids.is_none()
            && self.image_type.is_none()
            && self.date_range.is_none()
            && self.last_n_images.is_none()
    }

    pub fn with_satellite_ids<I, S>(mut self, satellite_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.satellite_ids = Some(satellite_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_image_types(mut self, image_types: impl IntoIterator<Item = ImageType>) -> Self {
        self.image_type = Some(image_types.into_iter().collect());
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    pub fn with_last_n_images(mut self, last_n_images: u32) -> Self {
        self.last_n_images = Some(last_n_images);
        self
    }
}
