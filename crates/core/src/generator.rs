// SPDX-License-Identifier: MIT

//!
//! Generate every week of a life, with the entries that overlap each one
//!

use crate::{Date, Entry, Profile, Week, WeekInterval, match_entries};
use log::debug;
use std::iter::FusedIterator;

/// Generate all `expected_lifespan_years * 52` weeks of the profile's life,
/// in index order, each with the entries that overlap it
///
/// `now` stands in for the end date of ongoing entries.  It defaults to
/// [`Date::today`], read once for the whole call.
pub fn generate_weeks<'a>(
    profile: &Profile,
    entries: &'a [Entry],
    now: Option<Date>,
) -> Vec<Week<'a>> {
    let now = now.unwrap_or_else(Date::today);
    debug!(
        "Generating {} weeks against {} entries (now = {now})",
        profile.total_weeks(),
        entries.len()
    );
    weeks(profile, entries, now).collect()
}

/// Lazily generate the weeks of the profile's life (see [`generate_weeks`])
pub fn weeks<'a>(profile: &Profile, entries: &'a [Entry], now: Date) -> Weeks<'a> {
    Weeks {
        profile: *profile,
        entries,
        now,
        next_index: 0,
    }
}

/// Iterator over the weeks of a life, created by [`weeks`]
#[derive(Debug, Clone)]
pub struct Weeks<'a> {
    profile: Profile,
    entries: &'a [Entry],
    now: Date,
    next_index: u32,
}

impl<'a> Iterator for Weeks<'a> {
    type Item = Week<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_index >= self.profile.total_weeks() {
            return None;
        }
        let interval = WeekInterval::for_index(&self.profile, self.next_index);
        self.next_index += 1;
        let entries = match_entries(&interval, self.entries, Some(self.now));
        Some(Week::from_interval(interval, entries))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.profile.total_weeks().saturating_sub(self.next_index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Weeks<'_> {}

impl FusedIterator for Weeks<'_> {}
