// SPDX-License-Identifier: MIT

//!
//! The input bundle handed to the week generator: a profile plus its entries
//!

use crate::{Date, Entry, Profile, Week, generate_weeks};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading [`LifeData`]
#[derive(Error, Debug)]
pub enum LifeDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A profile and the entries of that life
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LifeData {
    pub profile: Profile,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl LifeData {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, LifeDataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LifeDataError> {
        let path = path.as_ref();
        info!("Loading life data from {}", path.display());
        let data = std::fs::read_to_string(path)?;
        let life_data = Self::from_json(&data)?;
        info!(
            "Life data loaded ({} weeks, {} entries)",
            life_data.profile.total_weeks(),
            life_data.entries.len()
        );
        Ok(life_data)
    }

    /// Generate the weeks of this life (see [`generate_weeks`])
    pub fn weeks(&self, now: Option<Date>) -> Vec<Week<'_>> {
        generate_weeks(&self.profile, &self.entries, now)
    }
}
