// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validation configuration

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::ImageReference;
use crate::errors::{DomainError, DomainResult};

/// Tunable validation rules
///
/// Only the image extension list is configurable; every other rule is a
/// fixed domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Extensions (including the leading dot) accepted for image references
    pub allowed_image_extensions: Vec<String>,
}

impl ValidationConfig {
    /// Create a configuration with an explicit extension list
    pub fn new(allowed_image_extensions: Vec<String>) -> DomainResult<Self> {
        let config = Self {
            allowed_image_extensions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Add an accepted image extension
    pub fn with_image_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        if !self.allowed_image_extensions.contains(&extension) {
            self.allowed_image_extensions.push(extension);
        }
        self
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            "Loaded validation config with image extensions {:?}",
            config.allowed_image_extensions
        );
        Ok(config)
    }

    /// Check the configuration is usable
    ///
    /// # Rules
    /// - At least one image extension
    /// - Each extension starts with `.`, has a name and contains no `/`
    pub fn validate(&self) -> DomainResult<()> {
        if self.allowed_image_extensions.is_empty() {
            warn!("Validation config rejected: no image extensions");
            return Err(DomainError::Configuration(
                "at least one image extension is required".to_string(),
            ));
        }

        for extension in &self.allowed_image_extensions {
            let well_formed = extension.len() > 1
                && extension.starts_with('.')
                && !extension[1..].contains(['.', '/']);
            if !well_formed {
                warn!("Validation config rejected extension {:?}", extension);
                return Err(DomainError::Configuration(format!(
                    "invalid image extension: {:?}",
                    extension
                )));
            }
        }

        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_image_extensions: ImageReference::ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}
