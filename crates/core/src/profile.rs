// SPDX-License-Identifier: MIT

//!
//! The Semana profile type: whose life is being laid out, and for how long
//!

use crate::Date;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Weeks in a generated year.  A lifespan of `n` years is always `n * 52`
/// weeks, whatever the calendar says.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Days in a week
pub const DAYS_PER_WEEK: u32 = 7;

/// The smallest lifespan the input layer accepts
pub const MIN_LIFESPAN_YEARS: u32 = 1;

/// The largest lifespan the input layer accepts
pub const MAX_LIFESPAN_YEARS: u32 = 120;

/// The lifespan used when the input form collects nothing usable (zero)
pub const DEFAULT_LIFESPAN_YEARS: u32 = 80;

/// Errors that can arise in relation to a [`Profile`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Expected lifespan must be at least one year")]
    ZeroLifespan,

    /// The last week of the lifespan falls past the last representable date
    #[error("An expected lifespan of {0} years runs past the last supported date")]
    LifespanTooLong(u32),
}

/// The Semana [`Profile`] type
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Week 0 starts on this date
    date_of_birth: Date,

    /// Always positive
    expected_lifespan_years: u32,
}

impl Profile {
    /// Create a valid [`Profile`] if it is possible to do so with the values
    /// passed in
    pub fn from(date_of_birth: Date, expected_lifespan_years: u32) -> Result<Self, ProfileError> {
        if expected_lifespan_years == 0 {
            return Err(ProfileError::ZeroLifespan);
        }

        // Every day of the last week must be a representable date
        let last_day = expected_lifespan_years
            .checked_mul(WEEKS_PER_YEAR * DAYS_PER_WEEK)
            .and_then(|days| date_of_birth.checked_plus_days(u64::from(days) - 1));
        if last_day.is_none() {
            return Err(ProfileError::LifespanTooLong(expected_lifespan_years));
        }

        Ok(Profile {
            date_of_birth,
            expected_lifespan_years,
        })
    }

    /// Create a [`Profile`] from whatever the input form collected.  Zero
    /// means nothing usable was entered and becomes
    /// [`DEFAULT_LIFESPAN_YEARS`]; anything else is clamped into
    /// [`MIN_LIFESPAN_YEARS`]..=[`MAX_LIFESPAN_YEARS`].
    pub fn with_clamped_lifespan(
        date_of_birth: Date,
        expected_lifespan_years: i64,
    ) -> Result<Self, ProfileError> {
        let expected_lifespan_years = if expected_lifespan_years == 0 {
            DEFAULT_LIFESPAN_YEARS
        } else {
            expected_lifespan_years.clamp(MIN_LIFESPAN_YEARS.into(), MAX_LIFESPAN_YEARS.into())
                as u32
        };
        Profile::from(date_of_birth, expected_lifespan_years)
    }

    /// Get the date of birth
    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// Get the expected lifespan in years
    pub fn expected_lifespan_years(&self) -> u32 {
        self.expected_lifespan_years
    }

    /// The number of weeks in the generated timeline
    pub fn total_weeks(&self) -> u32 {
        self.expected_lifespan_years * WEEKS_PER_YEAR
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    date_of_birth: Date,
    expected_lifespan_years: u32,
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_profile = RawProfile::deserialize(deserializer)?;
        Profile::from(raw_profile.date_of_birth, raw_profile.expected_lifespan_years)
            .map_err(serde::de::Error::custom)
    }
}
