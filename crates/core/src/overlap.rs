// SPDX-License-Identifier: MIT

//!
//! Which entries overlap a week
//!

use crate::{Date, Entry, WeekInterval};

/// Whether the entry overlaps the inclusive span `week_start..=week_end`
///
/// An entry without an end date is treated as ending on `now`.  This means an
/// ongoing entry covers every week up to and including the one containing
/// `now`, and none of the weeks after it, even if they are still inside the
/// lifespan.
pub fn overlaps(entry: &Entry, week_start: Date, week_end: Date, now: Date) -> bool {
    let entry_end = entry.end_date().unwrap_or(now);

    // Ends before the week starts
    if entry_end < week_start {
        return false;
    }

    // Starts after the week ends
    if entry.start_date() > week_end {
        return false;
    }

    true
}

/// The entries overlapping the week, in the order they were passed in
///
/// `now` defaults to [`Date::today`] and is read once per call.
pub fn match_entries<'a>(
    interval: &WeekInterval,
    entries: &'a [Entry],
    now: Option<Date>,
) -> Vec<&'a Entry> {
    let now = now.unwrap_or_else(Date::today);
    entries
        .iter()
        .filter(|entry| overlaps(entry, interval.start_date, interval.end_date, now))
        .collect()
}
