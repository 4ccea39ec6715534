//! Reduction of raw catalog entities to the persisted record shape

use serde_json::Value;
use shared::{Category, ProjectedRecord, RawEntity};

/// Project a raw entity to `{name, height}`.
///
/// Planets store their `terrain` under `height`. Missing attributes become
/// `None`; this never fails.
pub fn project(raw: &RawEntity, category: Category) -> ProjectedRecord {
    ProjectedRecord {
        name: attribute_text(raw, "name"),
        height: attribute_text(raw, category.secondary_attribute()),
    }
}

/// Scalar attributes as text; null and nested values count as missing
fn attribute_text(raw: &RawEntity, attribute: &str) -> Option<String> {
    match raw.get(attribute)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
