// Copyright (c) 2025 - Cowboy AI, Inc.
//! Image Reference Value Object
//!
//! References to stored image files. Validation is syntactic only: the
//! referenced file is never looked up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::{split_extension, validate_image_reference};
use crate::config::ValidationConfig;
use crate::errors::{DomainError, DomainResult};

/// Absolute path to an image file
///
/// Invariants:
/// - The path before the extension starts with `/`
/// - The extension is an allowed image extension (`.jpg`, `.png`, `.tiff`,
///   `.gif` unless a [`ValidationConfig`] says otherwise)
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::ImageReference;
///
/// let url = ImageReference::new("/images/a.jpg").unwrap();
/// assert_eq!(url.extension(), ".jpg");
///
/// assert!(ImageReference::new("images/a.jpg").is_err());
/// assert!(ImageReference::new("/images/a.bmp").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageReference(String);

impl ImageReference {
    /// Extensions accepted by [`ImageReference::new`]
    pub const ALLOWED_EXTENSIONS: [&'static str; 4] = [".jpg", ".png", ".tiff", ".gif"];

    /// Create a new image reference using the built-in extension set
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        Self::validated(raw.into(), &Self::ALLOWED_EXTENSIONS)
    }

    /// Create a new image reference using the extensions from `config`
    pub fn with_config(raw: impl Into<String>, config: &ValidationConfig) -> DomainResult<Self> {
        Self::validated(raw.into(), &config.allowed_image_extensions)
    }

    fn validated<S: AsRef<str>>(raw: String, allowed_extensions: &[S]) -> DomainResult<Self> {
        if let Err(err) = validate_image_reference(&raw, allowed_extensions) {
            tracing::debug!("Rejected image reference: {:?}", raw);
            return Err(err);
        }

        Ok(Self(raw))
    }

    /// Get the reference as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File extension including the leading dot
    pub fn extension(&self) -> &str {
        split_extension(&self.0).1
    }

    /// Path without the extension
    pub fn path(&self) -> &str {
        split_extension(&self.0).0
    }

    /// Final path segment, extension included
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ImageReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ImageReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ImageReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ImageReference {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageReference> for String {
    fn from(value: ImageReference) -> Self {
        value.0
    }
}
