// SPDX-License-Identifier: MIT

//!
//! The Semana entry type: something that happened (or is still happening)
//! across a range of dates
//!

use crate::{Colour, Date, EntryId};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`Entry`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("The entry ends ({end}) before it starts ({start})")]
    Dates { start: Date, end: Date },
}

/// The kind of life entry
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display("work")]
    Work,
    #[display("education")]
    Education,
    #[display("event")]
    Event,
    #[display("relationship")]
    Relationship,
    #[display("custom")]
    Custom,
}

/// Default display colour for each category.  Categories missing from the
/// table have no default colour.
pub const CATEGORY_COLOURS: [(Category, Colour); 4] = [
    (Category::Work, Colour::from_rgb(0x3b, 0x82, 0xf6)),
    (Category::Education, Colour::from_rgb(0x10, 0xb9, 0x81)),
    (Category::Relationship, Colour::from_rgb(0xec, 0x48, 0x99)),
    (Category::Event, Colour::from_rgb(0xf5, 0x9e, 0x0b)),
];

impl Category {
    /// All categories
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Education,
        Category::Event,
        Category::Relationship,
        Category::Custom,
    ];

    /// Look up the category's default colour in [`CATEGORY_COLOURS`]
    pub fn default_colour(&self) -> Option<Colour> {
        CATEGORY_COLOURS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, colour)| *colour)
    }
}

/// The Semana [`Entry`] type
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The entry's ID
    id: EntryId,

    /// What kind of entry this is
    category: Category,

    /// Short label
    title: String,

    /// Longer free text
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    /// When did the entry begin/start
    start_date: Date,

    /// When did the entry end/finish (if it has)
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<Date>,

    /// Colour to draw the entry with
    #[serde(rename = "displayColor", skip_serializing_if = "Option::is_none")]
    colour: Option<Colour>,
}

impl Entry {
    /// Create a valid [`Entry`] if it is possible to do so with the values
    /// passed in
    pub fn from(
        id: EntryId,
        category: Category,
        title: impl Into<String>,
        description: Option<String>,
        start_date: Date,
        end_date: Option<Date>,
        colour: Option<Colour>,
    ) -> Result<Entry, EntryError> {
        check_dates(start_date, end_date)?;
        Ok(Entry {
            id,
            category,
            title: title.into(),
            description,
            start_date,
            end_date,
            colour,
        })
    }

    /// Create a new [`Entry`] with a fresh ID and the category's default
    /// colour
    pub fn new(
        category: Category,
        title: impl Into<String>,
        start_date: Date,
        end_date: Option<Date>,
        description: Option<String>,
    ) -> Result<Entry, EntryError> {
        Entry::from(
            EntryId::new(),
            category,
            title,
            description,
            start_date,
            end_date,
            category.default_colour(),
        )
    }

    /// Create a single-day [`Category::Event`] entry
    pub fn event(title: impl Into<String>, date: Date, description: Option<String>) -> Entry {
        Entry {
            id: EntryId::new(),
            category: Category::Event,
            title: title.into(),
            description,
            start_date: date,
            end_date: Some(date),
            colour: Category::Event.default_colour(),
        }
    }

    /// Replace the entry's display colour
    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Get the entry's ID
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Get the entry's category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Get the entry's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the entry's description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the entry's start [`Date`]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Set the entry's start [`Date`] if it'll be valid
    pub fn set_start_date(&mut self, start_date: Date) -> Result<(), EntryError> {
        check_dates(start_date, self.end_date)?;
        self.start_date = start_date;
        Ok(())
    }

    /// Get the entry's end [`Date`] (`None` means ongoing)
    pub fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    /// Set the entry's end [`Date`] if it'll be valid
    pub fn set_end_date(&mut self, end_date: Date) -> Result<(), EntryError> {
        check_dates(self.start_date, Some(end_date))?;
        self.end_date = Some(end_date);
        Ok(())
    }

    /// Whether the entry has no end date
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// Get the entry's display colour (if one was set)
    pub fn colour(&self) -> Option<Colour> {
        self.colour
    }
}

/// An end date must not come before the start date
fn check_dates(start: Date, end: Option<Date>) -> Result<(), EntryError> {
    match end {
        Some(end) if end < start => Err(EntryError::Dates { start, end }),
        _ => Ok(()),
    }
}

/// Used only by the custom deserialiser (to make it simpler)
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawEntry {
    id: Option<EntryId>,
    category: Category,
    title: String,
    description: Option<String>,
    start_date: Date,
    end_date: Option<Date>,
    #[serde(rename = "displayColor")]
    colour: Option<Colour>,
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_entry = RawEntry::deserialize(deserializer)?;

        // Entries written by hand may leave out the ID and colour
        let colour = raw_entry
            .colour
            .or_else(|| raw_entry.category.default_colour());

        Entry::from(
            raw_entry.id.unwrap_or_default(),
            raw_entry.category,
            raw_entry.title,
            raw_entry.description,
            raw_entry.start_date,
            raw_entry.end_date,
            colour,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use semana_macros::date;

    #[test]
    fn from() {
        // End before start
        let error = Entry::from(
            EntryId::new(),
            Category::Work,
            "Acme",
            None,
            date!("2010-01-02"),
            Some(date!("2010-01-01")),
            None,
        )
        .unwrap_err();
        assert_eq!(
            error,
            EntryError::Dates {
                start: date!("2010-01-02"),
                end: date!("2010-01-01"),
            }
        );

        // Same day is fine
        assert!(
            Entry::from(
                EntryId::new(),
                Category::Work,
                "Acme",
                None,
                date!("2010-01-01"),
                Some(date!("2010-01-01")),
                None,
            )
            .is_ok()
        );

        // Ongoing is fine
        let entry = Entry::from(
            EntryId::from("acme").unwrap(),
            Category::Custom,
            "Acme",
            Some(String::from("Pays the bills")),
            date!("2010-01-01"),
            None,
            None,
        )
        .unwrap();
        assert!(entry.is_ongoing());
        assert_eq!(entry.id().as_str(), "acme");
        assert_eq!(entry.description(), Some("Pays the bills"));
        assert_eq!(entry.colour(), None);
    }

    #[test]
    fn category_colours() {
        assert_eq!(Category::Work.default_colour().unwrap().as_hex(), "#3b82f6");
        assert_eq!(Category::Education.default_colour().unwrap().as_hex(), "#10b981");
        assert_eq!(Category::Relationship.default_colour().unwrap().as_hex(), "#ec4899");
        assert_eq!(Category::Event.default_colour().unwrap().as_hex(), "#f59e0b");
        assert_eq!(Category::Custom.default_colour(), None);
    }

    #[test]
    fn every_category() {
        for category in Category::ALL {
            assert_eq!(
                category.default_colour().is_some(),
                category != Category::Custom
            );
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
            assert_eq!(serde_json::from_str::<Category>(&json).unwrap(), category);
        }
    }

    #[test]
    fn new_uses_category_colour_and_fresh_ids() {
        let school = Entry::new(
            Category::Education,
            "School",
            date!("2005-09-01"),
            Some(date!("2012-07-01")),
            None,
        )
        .unwrap();
        let job = Entry::new(Category::Work, "Acme", date!("2015-01-05"), None, None).unwrap();

        assert_eq!(school.colour(), Category::Education.default_colour());
        assert_eq!(job.colour(), Category::Work.default_colour());
        assert_ne!(school.id(), job.id());

        assert!(
            Entry::new(
                Category::Work,
                "Backwards",
                date!("2015-01-05"),
                Some(date!("2014-01-05")),
                None
            )
            .is_err()
        );
    }

    #[test]
    fn event_is_single_day() {
        let wedding = Entry::event("Wedding", date!("2020-08-08"), None);
        assert_eq!(wedding.category(), Category::Event);
        assert_eq!(wedding.start_date(), date!("2020-08-08"));
        assert_eq!(wedding.end_date(), Some(date!("2020-08-08")));
        assert_eq!(wedding.colour(), Category::Event.default_colour());
    }

    #[test]
    fn setters_keep_dates_valid() {
        let mut entry = Entry::new(
            Category::Work,
            "Acme",
            date!("2015-01-05"),
            Some(date!("2016-01-05")),
            None,
        )
        .unwrap();

        assert!(entry.set_start_date(date!("2017-01-01")).is_err());
        assert_eq!(entry.start_date(), date!("2015-01-05"));
        assert!(entry.set_end_date(date!("2014-01-01")).is_err());
        assert_eq!(entry.end_date(), Some(date!("2016-01-05")));

        entry.set_end_date(date!("2019-01-01")).unwrap();
        entry.set_start_date(date!("2018-01-01")).unwrap();
        assert_eq!(entry.start_date(), date!("2018-01-01"));
        assert_eq!(entry.end_date(), Some(date!("2019-01-01")));
    }

    #[test]
    fn with_colour() {
        let colour = Colour::from_rgb(1, 2, 3);
        let entry = Entry::event("Move", date!("2020-01-01"), None).with_colour(colour);
        assert_eq!(entry.colour(), Some(colour));
    }

    #[test]
    fn deserialize() {
        let json = r##"{
            "id": "job-1",
            "category": "work",
            "title": "Acme",
            "startDate": "2015-01-05",
            "displayColor": "#000000"
        }"##;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id().as_str(), "job-1");
        assert_eq!(entry.category(), Category::Work);
        assert!(entry.is_ongoing());
        assert_eq!(entry.colour(), Some(Colour::from_rgb(0, 0, 0)));

        // Missing ID and colour are filled in
        let json = r#"{
            "category": "education",
            "title": "School",
            "startDate": "2005-09-01",
            "endDate": "2012-07-01"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(!entry.id().as_str().is_empty());
        assert_eq!(entry.colour(), Category::Education.default_colour());

        // Invalid
        let backwards = r#"{
            "category": "work",
            "title": "Acme",
            "startDate": "2015-01-05",
            "endDate": "2014-01-05"
        }"#;
        assert!(serde_json::from_str::<Entry>(backwards).is_err());
        let unknown_category = r#"{
            "category": "hobby",
            "title": "Chess",
            "startDate": "2015-01-05"
        }"#;
        assert!(serde_json::from_str::<Entry>(unknown_category).is_err());
    }

    #[test]
    fn serialize() {
        let entry = Entry::from(
            EntryId::from("trip").unwrap(),
            Category::Event,
            "Trip",
            None,
            date!("2019-04-01"),
            Some(date!("2019-04-03")),
            Category::Event.default_colour(),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r##"{"id":"trip","category":"event","title":"Trip","startDate":"2019-04-01","endDate":"2019-04-03","displayColor":"#f59e0b"}"##
        );
    }
}
