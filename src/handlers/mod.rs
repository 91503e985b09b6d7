//! HTTP API Handlers

pub mod health;
pub mod router;
pub mod state;
pub mod todos;

// Test utilities (compiled only in test builds)
#[cfg(test)]
pub mod test_helpers;

pub use router::{build_api_routes, build_app, build_router, AppState};
pub use state::TodoController;
