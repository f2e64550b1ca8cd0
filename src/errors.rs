//! Error types for hazard catalog value objects

use thiserror::Error;

use crate::domain::CardinalDirection;

/// Errors raised while constructing or decoding domain values
///
/// Every variant is produced synchronously by a constructor; an instance
/// that was returned `Ok` is valid for its whole lifetime.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// String does not name any member of a closed enumeration
    #[error("{given} is not a valid {type_name} (expected one of: {})", .valid_members.join(", "))]
    InvalidEnumValue {
        type_name: &'static str,
        given: String,
        valid_members: Vec<&'static str>,
    },

    /// Malformed `YYYYMMDD` date string
    #[error("The date {raw} is not a valid date of the form \"YYYYMMDD\"")]
    InvalidDate { raw: String },

    /// Image path without a leading slash or with a disallowed extension
    #[error("The url {raw} is not a valid image reference")]
    InvalidImageReference { raw: String },

    /// Bounding box coordinate outside its allowed range
    #[error("Invalid location: {field} bound {value} is out of range")]
    InvalidLocation {
        field: CardinalDirection,
        value: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for domain construction
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
