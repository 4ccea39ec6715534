//! Test fixtures: a small in-memory catalog and settings builders

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use harvester::{CatalogClient, HarvesterError, HarvesterResult, Settings};
use serde_json::json;
use shared::{Category, FetchFailure, RawEntity};

pub const PEOPLE: &[(&str, &str)] = &[
    ("Luke Skywalker", "172"),
    ("C-3PO", "167"),
    ("R2-D2", "96"),
    ("Darth Vader", "202"),
    ("Leia Organa", "150"),
];

pub const PLANETS: &[(&str, &str)] = &[
    ("Tatooine", "desert"),
    ("Alderaan", "grasslands, mountains"),
    ("Yavin IV", "jungle, rainforests"),
];

/// Catalog served from memory; ids map to the fixture tables (1-based)
#[derive(Default)]
pub struct InMemoryCatalog {
    failing: Option<(Category, u32)>,
    requests: Mutex<HashMap<Category, Vec<u32>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer 404 for one specific entity
    pub fn failing_on(category: Category, id: u32) -> Self {
        Self {
            failing: Some((category, id)),
            ..Self::default()
        }
    }

    pub fn requested(&self, category: Category) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl CatalogClient for InMemoryCatalog {
    async fn fetch(&self, category: Category, id: u32) -> HarvesterResult<RawEntity> {
        self.requests.lock().unwrap().entry(category).or_default().push(id);

        if self.failing == Some((category, id)) {
            return Err(HarvesterError::upstream(category, id, FetchFailure::NotFound));
        }

        let table = match category {
            Category::People => PEOPLE,
            Category::Planets => PLANETS,
        };
        let (name, secondary) = table
            .get(id as usize - 1)
            .ok_or_else(|| HarvesterError::upstream(category, id, FetchFailure::NotFound))?;

        let value = match category {
            Category::People => json!({"name": name, "height": secondary, "url": format!("/people/{id}/")}),
            Category::Planets => json!({"name": name, "terrain": secondary, "url": format!("/planets/{id}/")}),
        };
        Ok(RawEntity::from_value(value)?)
    }
}

/// Settings whose id ranges cover the fixture tables exactly
pub fn settings(output_path: &Path, cap: usize) -> Settings {
    Settings {
        max_person: PEOPLE.len() as u32,
        max_planets: PLANETS.len() as u32,
        output_path: output_path.to_path_buf(),
        count_of_people_and_planet: cap,
    }
}
