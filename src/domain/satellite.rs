// Copyright (c) 2025 - Cowboy AI, Inc.
//! Satellite record

use serde::{Deserialize, Serialize};

/// Imaging satellite and its pass direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Satellite {
    pub satellite_id: String,
    pub satellite_name: String,
    /// True when imaging on the ascending (south-to-north) pass
    pub ascending: bool,
}

impl Satellite {
    pub fn new(
        satellite_id: impl Into<String>,
        satellite_name: impl Into<String>,
        ascending: bool,
    ) -> Self {
        Self {
            satellite_id: satellite_id.into(),
            satellite_name: satellite_name.into(),
            ascending,
        }
    }
}
