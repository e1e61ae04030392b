// SPDX-License-Identifier: MIT

//!
//! Weeks of a life, and the arithmetic that maps between week indices and
//! calendar dates
//!
//! Week `i` starts `7 * i` days after the date of birth and ends 6 days later,
//! so consecutive weeks are contiguous and never overlap.
//!

use crate::{DAYS_PER_WEEK, Date, Entry, Profile};
use serde::Serialize;

/// The calendar span of a single week, without any entries attached
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct WeekInterval {
    pub index: u32,
    pub start_date: Date,
    pub end_date: Date,
}

impl WeekInterval {
    /// The interval of week `index` of the profile's life
    pub fn for_index(profile: &Profile, index: u32) -> Self {
        let start_date = week_start_date(profile, index);
        WeekInterval {
            index,
            start_date,
            end_date: start_date.plus_days(u64::from(DAYS_PER_WEEK - 1)),
        }
    }

    /// Whether `date` falls within the week (inclusive)
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A week along with the entries that overlap it.  The entries are borrowed
/// from the caller, in the caller's order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Week<'a> {
    pub index: u32,
    pub start_date: Date,
    pub end_date: Date,
    pub entries: Vec<&'a Entry>,
}

impl<'a> Week<'a> {
    /// Attach entries to an interval
    pub fn from_interval(interval: WeekInterval, entries: Vec<&'a Entry>) -> Self {
        Week {
            index: interval.index,
            start_date: interval.start_date,
            end_date: interval.end_date,
            entries,
        }
    }

    /// The week's calendar span
    pub fn interval(&self) -> WeekInterval {
        WeekInterval {
            index: self.index,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Whether `date` falls within the week (inclusive)
    pub fn contains(&self, date: Date) -> bool {
        self.interval().contains(date)
    }
}

/// The first day of week `index`
pub fn week_start_date(profile: &Profile, index: u32) -> Date {
    profile
        .date_of_birth()
        .plus_days(u64::from(index) * u64::from(DAYS_PER_WEEK))
}

/// The last day of week `index`
pub fn week_end_date(profile: &Profile, index: u32) -> Date {
    WeekInterval::for_index(profile, index).end_date
}

/// The index of the week that `date` falls in.  Dates before birth give week
/// `0` and dates past the end of the lifespan give the last week.
pub fn week_index_for_date(profile: &Profile, date: Date) -> u32 {
    let days = date.days_since(profile.date_of_birth());
    let index = days.div_euclid(i64::from(DAYS_PER_WEEK));
    let last_index = i64::from(profile.total_weeks().saturating_sub(1));
    index.clamp(0, last_index) as u32
}
