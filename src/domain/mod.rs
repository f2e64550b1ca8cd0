// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hazard Catalog Domain Models
//!
//! Value objects and records describing natural hazards and the satellite
//! imagery collected for them. Every value object is validated once, on
//! construction, and is immutable afterwards.
//!
//! # Enumerations
//!
//! - [`HazardType`] - volcanoes / earthquakes
//! - [`ImageType`] - geocoded and orthorectified radar products
//! - [`DatabaseOutcome`] - result reported by the persistence layer
//!
//! # Value Objects with Invariants
//!
//! - [`Date`] - `YYYYMMDD` date strings
//! - [`ImageReference`] - absolute image paths with an image extension
//! - [`Location`] - center point plus a bounded cardinal bounding box
//!
//! # Records
//!
//! - [`Satellite`], [`Hazard`], [`HazardInfo`], [`Image`]
//! - [`HazardInfoFilter`] - query criteria for the search layer

pub mod date;
pub mod filter;
pub mod hazard;
pub mod hazard_type;
pub mod image;
pub mod image_reference;
pub mod image_type;
pub mod invariants;
pub mod location;
pub mod outcome;
pub mod satellite;

// Re-export value objects
pub use date::{Date, DateRange};
pub use filter::HazardInfoFilter;
pub use hazard::{Hazard, HazardInfo};
pub use hazard_type::HazardType;
pub use image::{Image, ImageVariant};
pub use image_reference::ImageReference;
pub use image_type::{ImageProduct, ImageProjection, ImageType};
pub use invariants::ValidationResult;
pub use location::{CardinalDirection, GeoCoordinate, Location};
pub use outcome::DatabaseOutcome;
pub use satellite::Satellite;
