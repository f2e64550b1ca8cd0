//! Domain model for a natural hazard monitoring catalog
//!
//! This crate provides the validated value objects, records and query
//! criteria shared by the services that store hazards, serve them over
//! HTTP and process their satellite imagery. It performs no I/O.

pub mod config;
pub mod domain;
pub mod errors;

// Re-export commonly used types
pub use config::ValidationConfig;
pub use domain::{
    CardinalDirection, DatabaseOutcome, Date, DateRange, GeoCoordinate, Hazard, HazardInfo,
    HazardInfoFilter, HazardType, Image, ImageReference, ImageType, ImageVariant, Location,
    Satellite,
};
pub use errors::{DomainError, DomainResult};
