//! Harvester-specific data types

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::ProjectedRecord;

use crate::error::{HarvesterError, HarvesterResult};

/// Run settings, read once before the first cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Highest person id the catalog serves
    pub max_person: u32,
    /// Highest planet id the catalog serves
    pub max_planets: u32,
    /// Location of the persisted collection
    pub output_path: PathBuf,
    /// Cap on unique records per category
    pub count_of_people_and_planet: usize,
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json_str(content: &str) -> HarvesterResult<Self> {
        let settings: Settings = serde_json::from_str(content)
            .map_err(|e| HarvesterError::config(format!("Invalid settings document: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> HarvesterResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            HarvesterError::config(format!("Cannot read settings file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> HarvesterResult<()> {
        if self.max_person == 0 {
            return Err(HarvesterError::config("max_person must be at least 1"));
        }
        if self.max_planets == 0 {
            return Err(HarvesterError::config("max_planets must be at least 1"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(HarvesterError::config("output_path must not be empty"));
        }
        Ok(())
    }
}

/// Loop options that come from the command line rather than the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Wait between the person fetch and the planet fetch
    pub pacing: Duration,
    /// Stop after this many cycles even if the caps are not reached
    pub max_cycles: Option<u32>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            pacing: Duration::from_secs(5),
            max_cycles: None,
        }
    }
}

/// Result of reconciling incoming records with one category list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub records: Vec<ProjectedRecord>,
    /// Length of the list before the merge
    pub existing_count: usize,
    /// The list was already at the cap; incoming records were dropped
    pub capped: bool,
    pub appended: usize,
    pub duplicates: Vec<ProjectedRecord>,
}

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Done,
}

/// What a single fetch-merge-persist iteration ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Continued {
        people_appended: usize,
        planets_appended: usize,
    },
    Done,
}

/// Reported when the loop stops
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u32,
    pub state: DriverState,
    /// Collection sizes as last observed by the driver
    pub people: usize,
    pub planets: usize,
}
