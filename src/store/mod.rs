//! In-memory todo storage
//!
//! Nothing here outlives the process.

pub mod collection;
pub mod types;

pub use collection::{by_id, TodoCollection};
pub use types::{Todo, TodoId, TodoParams};
