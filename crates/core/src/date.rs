// SPDX-License-Identifier: MIT

//!
//! The Semana date type
//!

use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// The format used when parsing and serialising a [`Date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The year/month/day combination is not a real calendar date
    #[error("`{year}-{month}-{day}` is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// The string is not a `YYYY-MM-DD` date
    #[error("`{0}` is not a `YYYY-MM-DD` date")]
    Unparseable(String),
}

/// The Semana date type
///
/// A local calendar date: no time of day and no timezone.  All week arithmetic
/// is done in whole calendar days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Create a new [`Date`] if the result will be valid
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Date, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parse a `YYYY-MM-DD` string
    pub fn parse<S: AsRef<str>>(string: S) -> Result<Date, DateError> {
        let string = string.as_ref().trim();
        NaiveDate::parse_from_str(string, DATE_FORMAT)
            .map(Date)
            .map_err(|_| DateError::Unparseable(string.to_string()))
    }

    /// Today's date according to the local system clock
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// The date `days` calendar days after this one
    ///
    /// Panics if the result falls outside the range chrono can represent.
    pub fn plus_days(&self, days: u64) -> Date {
        Date(self.0 + Days::new(days))
    }

    /// The date `days` calendar days after this one, if it can be represented
    pub fn checked_plus_days(&self, days: u64) -> Option<Date> {
        self.0.checked_add_days(Days::new(days)).map(Date)
    }

    /// The signed number of whole days from `earlier` to `self`
    pub fn days_since(&self, earlier: Date) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// e.g. `Jan 5, 2024`
    pub fn as_short_display_format(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }

    /// `YYYY-MM-DD` format
    pub fn as_iso_format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Get the [`Date`]'s month (1 to 12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Get the [`Date`]'s day of the month (1 to 31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Date(value)
    }
}

impl FromStr for Date {
    type Err = DateError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_iso_format())
    }
}

// TODO: add visitor so that can deserialise from {year, month, day} as well?
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Date::parse(string).map_err(serde::de::Error::custom)
    }
}

/// Format a date for display, e.g. `Jan 5, 2024`
pub fn format_date(date: Date) -> String {
    date.as_short_display_format()
}
