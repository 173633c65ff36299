//! # Nutriverse Core
//!
//! Core engine for the Nutriverse food nutrition service.
//!
//! This crate contains pure in-memory data operations:
//! - The immutable [`FoodStore`] loaded once at startup
//! - The [`Query`] engine: structured filters, free-text relevance scoring
//! - Seasonal flag derivation from the current calendar month
//!
//! **No API concerns**: HTTP servers, JSON endpoints and OpenAPI docs belong
//! in `api-rest` and `api-shared`. Client-held favorites belong in
//! `nutriverse-favorites`; this crate neither reads nor writes them.

pub mod config;
pub mod constants;
pub mod error;
pub mod food;
pub mod query;
pub mod season;
pub mod store;

pub use config::CoreConfig;
pub use error::{FoodError, FoodResult};
pub use food::{Category, Food, HealthBenefit, HealthGoal, NutritionalFacts, SeasonalFood};
pub use nutriverse_types::{Slug, TextError};
pub use query::Query;
pub use season::Season;
pub use store::FoodStore;
