// Copyright (c) 2025 - Cowboy AI, Inc.
//! Satellite image record and its processing variants

use serde::{Deserialize, Serialize};

use super::{Date, ImageReference, ImageType};

/// One satellite image product
///
/// Every product is stored in four forms: the raw download, the
/// georeferenced TIFF, a compressed preview and a modified (annotated) copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub hazard_id: String,
    pub satellite_id: String,
    pub image_type: ImageType,
    pub image_date: Date,
    pub raw_image_url: ImageReference,
    pub tif_image_url: ImageReference,
    pub compressed_image_url: ImageReference,
    pub modified_image_url: ImageReference,
}

/// Processing variant of an [`Image`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageVariant {
    Raw,
    Tif,
    Compressed,
    Modified,
}

impl ImageVariant {
    pub const ALL: [ImageVariant; 4] = [Self::Raw, Self::Tif, Self::Compressed, Self::Modified];
}

impl Image {
    /// Reference to one processing variant
    pub fn url(&self, variant: ImageVariant) -> &ImageReference {
        match variant {
            ImageVariant::Raw => &self.raw_image_url,
            ImageVariant::Tif => &self.tif_image_url,
            ImageVariant::Compressed => &self.compressed_image_url,
            ImageVariant::Modified => &self.modified_image_url,
        }
    }

    /// All variant references, raw first
    pub fn urls(&self) -> impl Iterator<Item = (ImageVariant, &ImageReference)> {
        ImageVariant::ALL
            .into_iter()
            .map(move |variant| (variant, self.url(variant)))
    }
}
