//! Todo record types
//!
//! The wire shape uses capitalised field names (`Id`, `Title`, `Dt_created`, ...).
//! On input every field is optional, keys match case-insensitively and, when a
//! field appears more than once, the last occurrence wins.

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a todo record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Todo {
    #[serde(rename = "Id")]
    pub id: TodoId,

    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Category")]
    pub category: String,

    /// Creation timestamp, application-supplied and free-form
    #[serde(rename = "Dt_created")]
    pub dt_created: String,

    /// Completion timestamp, same caveat as `dt_created`
    #[serde(rename = "Dt_completed")]
    pub dt_completed: String,

    #[serde(rename = "State")]
    pub state: String,
}

impl Todo {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }
}

impl<'de> Deserialize<'de> for Todo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let params = TodoParams::deserialize(deserializer)?;
        let id = params.id.unwrap_or_default();
        Ok(params.into_todo(id))
    }
}

/// Request body for create and update.
///
/// Same shape as [`Todo`], except `Id` is kept optional so the update handler
/// can tell "absent" from "zero".
#[derive(Debug, Clone, Default)]
pub struct TodoParams {
    pub id: Option<TodoId>,
    pub title: String,
    pub category: String,
    pub dt_created: String,
    pub dt_completed: String,
    pub state: String,
}

impl TodoParams {
    /// Build the stored record under `id`, discarding any body-supplied ID
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            category: self.category,
            dt_created: self.dt_created,
            dt_completed: self.dt_completed,
            state: self.state,
        }
    }

    /// Slot for a string field, matched ignoring ASCII case
    fn text_field(&mut self, key: &str) -> Option<&mut String> {
        let slot = if key.eq_ignore_ascii_case("Title") {
            &mut self.title
        } else if key.eq_ignore_ascii_case("Category") {
            &mut self.category
        } else if key.eq_ignore_ascii_case("Dt_created") {
            &mut self.dt_created
        } else if key.eq_ignore_ascii_case("Dt_completed") {
            &mut self.dt_completed
        } else if key.eq_ignore_ascii_case("State") {
            &mut self.state
        } else {
            return None;
        };
        Some(slot)
    }
}

struct TodoParamsVisitor;

impl<'de> Visitor<'de> for TodoParamsVisitor {
    type Value = TodoParams;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a todo object")
    }

    // Entries are visited in document order, so a later key overwrites an earlier one.
    // A `null` value leaves the field as it was.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut params = TodoParams::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("Id") {
                if let Some(id) = map.next_value::<Option<TodoId>>()? {
                    params.id = Some(id);
                }
            } else if let Some(slot) = params.text_field(&key) {
                if let Some(value) = map.next_value::<Option<String>>()? {
                    *slot = value;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(params)
    }
}

impl<'de> Deserialize<'de> for TodoParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TodoParamsVisitor)
    }
}
