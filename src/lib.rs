//! Todo Server Library
//!
//! Minimal REST service over one in-memory, ordered collection of todo records.
//!
//! # Layout
//! - [`store`]: the record type and the ordered collection
//! - [`handlers`]: controller, axum handlers and router
//! - ambient concerns: [`config`], [`errors`], [`metrics`], [`middleware`],
//!   [`tracing_setup`], [`validation`]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod store;
pub mod tracing_setup;
pub mod validation;
