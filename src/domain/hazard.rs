// Copyright (c) 2025 - Cowboy AI, Inc.
//! Hazard Records
//!
//! [`Hazard`] is the catalog entry owned by storage; [`HazardInfo`] is the
//! summary handed to API consumers. They currently carry the same fields and
//! convert losslessly into each other, but are kept as separate types so the
//! two contracts can diverge independently.

use serde::{Deserialize, Serialize};

use super::{Date, HazardType, Location};

/// Cataloged hazard event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub hazard_id: String,
    pub name: String,
    pub hazard_type: HazardType,
    pub location: Location,
    pub last_updated: Date,
}

impl Hazard {
    pub fn new(
        hazard_id: impl Into<String>,
        name: impl Into<String>,
        hazard_type: HazardType,
        location: Location,
        last_updated: Date,
    ) -> Self {
        Self {
            hazard_id: hazard_id.into(),
            name: name.into(),
            hazard_type,
            location,
            last_updated,
        }
    }

    /// Copy of this hazard with a new `last_updated` date
    pub fn updated_on(&self, last_updated: Date) -> Self {
        Self {
            last_updated,
            ..self.clone()
        }
    }
}

/// Hazard summary exposed to API consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardInfo {
    pub hazard_id: String,
    pub name: String,
    pub hazard_type: HazardType,
    pub location: Location,
    pub last_updated: Date,
}

impl From<Hazard> for HazardInfo {
    fn from(hazard: Hazard) -> Self {
        Self {
            hazard_id: hazard.hazard_id,
            name: hazard.name,
            hazard_type: hazard.hazard_type,
            location: hazard.location,
            last_updated: hazard.last_updated,
        }
    }
}

impl From<HazardInfo> for Hazard {
    fn from(info: HazardInfo) -> Self {
        Self {
            hazard_id: info.hazard_id,
            name: info.name,
            hazard_type: info.hazard_type,
            location: info.location,
            last_updated: info.last_updated,
        }
    }
}
