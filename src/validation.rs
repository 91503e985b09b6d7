//! Request input parsing
//!
//! Only type-level checks live here: record fields are free-form.

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::store::TodoId;

lazy_static! {
    static ref TODO_ID_PATTERN: Regex = Regex::new(r"^[0-9]+$").expect("valid todo id regex");
}

/// Parse a path segment into a [`TodoId`]. Accepts `[0-9]+` fitting in a u64.
pub fn parse_todo_id(raw: &str) -> Result<TodoId> {
    if !TODO_ID_PATTERN.is_match(raw) {
        return Err(anyhow!("'{raw}' is not a non-negative integer"));
    }

    raw.parse::<u64>()
        .map(TodoId)
        .map_err(|e| anyhow!("'{raw}' is out of range: {e}"))
}

/// Check that a body-supplied ID, if any, agrees with the path ID
pub fn check_body_id(path_id: TodoId, body_id: Option<TodoId>) -> Result<()> {
    match body_id {
        Some(body_id) if body_id != path_id => Err(anyhow!(
            "body Id {body_id} does not match path id {path_id}"
        )),
        _ => Ok(()),
    }
}
