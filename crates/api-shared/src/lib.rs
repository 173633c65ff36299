//! # API Shared
//!
//! Shared request/response types for the Nutriverse API surfaces.
//!
//! Contains:
//! - Wire DTOs (`models` module) with serde + OpenAPI schemas
//! - The shared `HealthService`
//!
//! Used by `api-rest` (and any future API surface) so that all boundaries
//! agree on one wire shape.

pub mod health;
pub mod models;

pub use health::HealthService;
pub use models::*;
