// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for hazard-catalog
//!
//! Deterministic hazards, images and filters shared by the integration tests.
//! Nothing here reads the clock.

#![allow(dead_code)]

use hazard_catalog::domain::{
    Date, DateRange, GeoCoordinate, Hazard, HazardInfoFilter, HazardType, Image,
    ImageReference, ImageType, Location, Satellite,
};

pub const HAZARD_ID: &str = "etna";
pub const SATELLITE_ID: &str = "S1A";
pub const IMAGE_DATE: &str = "20190411";

/// Install a test subscriber so `RUST_LOG=debug` shows rejected inputs
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn etna_location() -> Location {
    Location::new(
        GeoCoordinate::new(37.75, 14.99),
        GeoCoordinate::new(37.9, 14.99),
        GeoCoordinate::new(37.6, 14.99),
        GeoCoordinate::new(37.75, 15.2),
        GeoCoordinate::new(37.75, 14.8),
    )
    .expect("fixture location is valid")
}

pub fn etna() -> Hazard {
    Hazard::new(
        HAZARD_ID,
        "Mount Etna",
        HazardType::Volcanoes,
        etna_location(),
        Date::new(IMAGE_DATE).expect("fixture date is valid"),
    )
}

pub fn sentinel() -> Satellite {
    Satellite::new(SATELLITE_ID, "Sentinel-1A", true)
}

pub fn image_url(path: &str) -> ImageReference {
    ImageReference::new(path).expect("fixture image path is valid")
}

pub fn etna_image() -> Image {
    Image {
        hazard_id: HAZARD_ID.to_string(),
        satellite_id: SATELLITE_ID.to_string(),
        image_type: ImageType::GeoInterferogram,
        image_date: Date::new(IMAGE_DATE).expect("fixture date is valid"),
        raw_image_url: image_url("/etna/20190411/raw.tiff"),
        tif_image_url: image_url("/etna/20190411/geo.tiff"),
        compressed_image_url: image_url("/etna/20190411/preview.jpg"),
        modified_image_url: image_url("/etna/20190411/annotated.png"),
    }
}

pub fn spring_2019_filter() -> HazardInfoFilter {
    HazardInfoFilter::default()
        .with_satellite_ids([SATELLITE_ID])
        .with_image_types([ImageType::GeoInterferogram, ImageType::OrthoInterferogram])
        .with_date_range(DateRange::new(
            Date::new("20190301").expect("fixture date is valid"),
            Some(Date::new("20190531").expect("fixture date is valid")),
        ))
        .with_last_n_images(10)
}
