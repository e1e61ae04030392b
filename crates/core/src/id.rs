// SPDX-License-Identifier: MIT

//!
//! Entry IDs (create a process-unique one, or wrap one supplied by the caller)
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can arise in relation to an [`EntryId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryIdError {
    #[error("Entry ID cannot be empty")]
    Empty,
}

/// The Semana entry ID type.  Any non-empty string is accepted; freshly
/// generated IDs are UUIDv4 strings.
#[rustfmt::skip]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create a new, unique `EntryId`
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an ID from a string if the string is a valid ID
    pub fn from<S: ToString>(string: S) -> Result<Self, EntryIdError> {
        let string = string.to_string();
        if string.trim().is_empty() {
            Err(EntryIdError::Empty)
        } else {
            Ok(Self(string))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        EntryId::from(string).map_err(serde::de::Error::custom)
    }
}
