//! Wire DTOs shared across API surfaces.
//!
//! Field names follow the camelCase convention of the dataset, so
//! `food_id` serializes as `foodId`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Structured error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

/// Request body for `POST /foods`.
///
/// The only recognised action is `"favorite"`. The endpoint is a stub
/// boundary for a future persistence layer; favorites themselves live
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteReq {
    pub action: String,
    #[serde(default)]
    pub food_id: Option<String>,
}

/// Acknowledgement for a recognised favorite action.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRes {
    pub success: bool,
    pub message: String,
}
