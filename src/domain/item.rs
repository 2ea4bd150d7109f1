//! Catalog item model.
//!
//! SWAPI records are loosely structured: people, planets and starships share
//! almost no fields. [`Item`] keeps the raw JSON object and exposes the few
//! accessors the list and detail views need. Field text follows template
//! substitution rules, so a missing field reads `undefined` rather than
//! being special-cased.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text substituted for a field the record does not carry.
pub const MISSING_FIELD: &str = "undefined";

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    /// Raw value of a field, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Display name: `name` if truthy, otherwise `title`, otherwise empty.
    ///
    /// ```
    /// use holocron::domain::Item;
    /// use serde_json::json;
    ///
    /// let item: Item = serde_json::from_value(json!({ "name": "", "title": "A New Hope" })).unwrap();
    /// assert_eq!(item.display_name(), "A New Hope");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        ["name", "title"]
            .into_iter()
            .filter_map(|key| self.get(key))
            .find(|value| is_truthy(value))
            .map(value_text)
            .unwrap_or_default()
    }

    /// Field rendered as substitution text; [`MISSING_FIELD`] when absent.
    #[must_use]
    pub fn field_text(&self, key: &str) -> String {
        self.get(key)
            .map_or_else(|| MISSING_FIELD.to_string(), value_text)
    }

    /// Number of entries in the `films` list; zero when absent or not a list.
    #[must_use]
    pub fn film_count(&self) -> usize {
        self.get("films")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// The record as indented JSON.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(|v| if v.is_null() { String::new() } else { value_text(v) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
