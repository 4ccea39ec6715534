//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::errors::SharedError;

/// Unique identifier for a harvester run, attached to every log event
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two record kinds sampled from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Planets,
}

impl Category {
    /// Name used in catalog URLs and as the collection key
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Planets => "planets",
        }
    }

    /// Raw attribute stored as the secondary value of a projected record
    pub fn secondary_attribute(&self) -> &'static str {
        match self {
            Category::People => "height",
            Category::Planets => "terrain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "people" => Ok(Category::People),
            "planets" => Ok(Category::Planets),
            _ => Err(SharedError::UnknownCategory { input: s.to_string() }),
        }
    }
}

/// Entity as returned by the catalog, kept as an open attribute map
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntity(Map<String, Value>);

impl RawEntity {
    /// Wrap a decoded response body; anything but a JSON object is rejected
    pub fn from_value(value: Value) -> Result<Self, SharedError> {
        match value {
            Value::Object(attributes) => Ok(Self(attributes)),
            other => Err(SharedError::DeserializationError {
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Persisted shape of a record: a name plus one secondary value.
///
/// For planets `height` holds the raw `terrain` attribute; the on-disk shape
/// does not depend on the category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
}

impl ProjectedRecord {
    pub fn new(name: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            height: Some(height.into()),
        }
    }
}

/// Two-category collection as stored on disk
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub people: Vec<ProjectedRecord>,
    pub planets: Vec<ProjectedRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, category: Category) -> &[ProjectedRecord] {
        match category {
            Category::People => &self.people,
            Category::Planets => &self.planets,
        }
    }

    /// Current number of records held for a category
    pub fn len(&self, category: Category) -> usize {
        self.records(category).len()
    }
}

/// Reasons a catalog request can fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailure {
    NotFound,
    ServerError(String),
    NetworkError(String),
    InvalidResponse(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::NotFound => write!(f, "not found"),
            FetchFailure::ServerError(status) => write!(f, "server error ({status})"),
            FetchFailure::NetworkError(message) => write!(f, "network error: {message}"),
            FetchFailure::InvalidResponse(message) => write!(f, "invalid response: {message}"),
        }
    }
}
