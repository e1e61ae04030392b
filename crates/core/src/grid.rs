// SPDX-License-Identifier: MIT

//!
//! Small pure helpers for whatever draws the weeks (colours, ages, grouping)
//!

use crate::{Colour, WEEKS_PER_YEAR, Week};

/// Colour of a week that no entry overlaps
pub const EMPTY_WEEK_COLOUR: Colour = Colour::from_rgb(0xe5, 0xe7, 0xeb);

/// Colour of a week whose first entry has no colour of its own
pub const FALLBACK_ENTRY_COLOUR: Colour = Colour::from_rgb(0x63, 0x66, 0xf1);

/// Age at the start of a week, in whole years plus leftover weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Age {
    pub years: u32,
    pub weeks: u32,
}

impl Week<'_> {
    /// The colour to draw the week with.  The first entry wins.
    pub fn display_colour(&self) -> Colour {
        match self.entries.first() {
            None => EMPTY_WEEK_COLOUR,
            Some(entry) => entry.colour().unwrap_or(FALLBACK_ENTRY_COLOUR),
        }
    }

    /// Age at the start of the week
    pub fn age(&self) -> Age {
        Age {
            years: self.index / WEEKS_PER_YEAR,
            weeks: self.index % WEEKS_PER_YEAR,
        }
    }

    /// 1-based week number, for display
    pub fn week_of_life(&self) -> u32 {
        self.index + 1
    }
}

/// Split the weeks into consecutive runs that start in the same calendar year
pub fn group_by_year<'w, 'a>(weeks: &'w [Week<'a>]) -> Vec<(i32, &'w [Week<'a>])> {
    weeks
        .chunk_by(|a, b| a.start_date.year() == b.start_date.year())
        .filter_map(|group| group.first().map(|week| (week.start_date.year(), group)))
        .collect()
}
