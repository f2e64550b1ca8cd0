// Copyright (c) 2025 - Cowboy AI, Inc.
//! Calendar Date Value Objects
//!
//! Dates travel through the catalog as compact `YYYYMMDD` strings. The
//! wrapper keeps the original text untouched and only guarantees the shape.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::invariants::validate_date_string;
use crate::errors::{DomainError, DomainResult};

/// Date of the form `YYYYMMDD`
///
/// Invariants:
/// - Exactly 8 ASCII digits
/// - Month in 1-12
/// - Day in 1-31 (no per-month or leap-year check)
///
/// Ordering compares the underlying strings, which for this fixed-width
/// format is chronological order.
///
/// # Examples
///
/// ```rust
/// use hazard_catalog::domain::Date;
///
/// let today = Date::new("20190411").unwrap();
/// assert_eq!(today.as_str(), "20190411");
/// assert_eq!(today.year(), 2019);
/// assert_eq!(today.month(), 4);
///
/// assert!(Date::new("20191301").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(String);

impl Date {
    /// Create a new date with validation
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();

        if let Err(err) = validate_date_string(&raw) {
            tracing::debug!("Rejected date: {:?}", raw);
            return Err(err);
        }

        Ok(Self(raw))
    }

    /// Build a date from a calendar date
    ///
    /// Years outside 0-9999 do not fit the 8-digit form and are rejected.
    pub fn from_naive_date(date: NaiveDate) -> DomainResult<Self> {
        Self::new(date.format("%Y%m%d").to_string())
    }

    /// Current UTC date
    pub fn today() -> Self {
        // Current years always fit four digits, which is all the invariant checks.
        Self(Utc::now().date_naive().format("%Y%m%d").to_string())
    }

    /// Get the date as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year component (characters 1-4)
    pub fn year(&self) -> u32 {
        self.component(0..4)
    }

    /// Month component (characters 5-6)
    pub fn month(&self) -> u32 {
        self.component(4..6)
    }

    /// Day component (characters 7-8)
    pub fn day(&self) -> u32 {
        self.component(6..8)
    }

    /// Convert to a calendar date
    ///
    /// Returns `None` for strings the loose invariant admits but the
    /// calendar does not, such as `20190231`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year() as i32, self.month(), self.day())
    }

    fn component(&self, range: std::ops::Range<usize>) -> u32 {
        // Digits-only by construction.
        self.0[range]
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Date {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Date {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Date {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.0
    }
}

/// Range of dates used to filter images
///
/// An absent `end` means the range is open and runs up to the current
/// date; resolving that is left to the consumer via [`DateRange::end_or_today`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    #[serde(default)]
    pub end: Option<Date>,
}

impl DateRange {
    pub fn new(start: Date, end: Option<Date>) -> Self {
        Self { start, end }
    }

    /// Range starting at `start` with no explicit end
    pub fn open_ended(start: Date) -> Self {
        Self { start, end: None }
    }

    pub fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }

    /// Explicit end, or today's UTC date for an open range
    pub fn end_or_today(&self) -> Date {
        self.end.clone().unwrap_or_else(Date::today)
    }
}
