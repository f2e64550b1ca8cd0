// Copyright (c) 2025 - Cowboy AI, Inc.
//! Persistence outcome reported by storage collaborators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::parse_member;
use crate::errors::{DomainError, DomainResult};

/// Result of a persistence operation performed outside this crate
///
/// Shares the enum conversion contract: case-insensitive `parse`, lowercase
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DatabaseOutcome {
    Success,
    Failure,
}

impl DatabaseOutcome {
    /// Every member, in declaration order
    pub const ALL: [DatabaseOutcome; 2] = [Self::Success, Self::Failure];

    /// Get the canonical lowercase representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Parse from a member name, ignoring case
    pub fn parse(s: &str) -> DomainResult<Self> {
        parse_member("database outcome", s, &Self::ALL, Self::as_str)
    }

    /// Check if the operation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for DatabaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DatabaseOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DatabaseOutcome {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DatabaseOutcome> for String {
    fn from(value: DatabaseOutcome) -> Self {
        value.as_str().to_string()
    }
}

impl From<bool> for DatabaseOutcome {
    fn from(succeeded: bool) -> Self {
        if succeeded {
            Self::Success
        } else {
            Self::Failure
        }
    }
}
