//! HTTP endpoints and shared application state.
//!
//! Each public async function corresponds to an API route registered in
//! [`router`]. Handlers extract path/query/body parameters via axum
//! extractors and delegate to the [`FoodStore`] and the [`Query`] engine,
//! returning JSON responses or [`ApiError`] on failure.
//!
//! The current calendar month is read once per request at this boundary and
//! passed into the engine, which keeps the engine itself a pure function of
//! its inputs.

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, Query as AxumQuery, State},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Datelike, Utc};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ErrorRes, FavoriteReq, FavoriteRes, HealthRes, HealthService};
use nutriverse_core::{
    Category, Food, FoodStore, HealthBenefit, HealthGoal, NutritionalFacts, Query, Season,
    SeasonalFood,
};

use crate::error::ApiError;

/// Application state shared across REST API handlers.
///
/// The store is immutable after load, so handlers share it behind an `Arc`
/// with no synchronisation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FoodStore>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_foods, get_food, favorite_food),
    components(schemas(
        Food,
        NutritionalFacts,
        HealthBenefit,
        Category,
        HealthGoal,
        Season,
        SeasonalFood,
        HealthRes,
        ErrorRes,
        FavoriteReq,
        FavoriteRes
    ))
)]
struct ApiDoc;

/// Builds the REST router with all routes, Swagger UI and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/foods", get(list_foods))
        .route("/foods", post(favorite_food))
        .route("/foods/:slug", get(get_food))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the Nutriverse service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/foods",
    params(Query),
    responses(
        (status = 200, description = "Filtered food records with seasonal flags", body = [SeasonalFood]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List food records matching the given filters
///
/// Applies every active filter with AND semantics, orders by relevance when
/// `search` is present, and augments each record with `isInSeason` derived
/// from the current calendar month. Unknown `category`, `healthGoal` or
/// `season` values match nothing and yield an empty array rather than an
/// error.
///
/// # Errors
/// Returns `500 Internal Server Error` if response serialization fails.
#[axum::debug_handler]
async fn list_foods(
    State(state): State<AppState>,
    AxumQuery(query): AxumQuery<Query>,
) -> Result<Json<Vec<SeasonalFood>>, ApiError> {
    let results = query.run(&state.store, Utc::now().month0());
    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/foods/{slug}",
    params(
        ("slug" = String, Path, description = "URL-safe food identifier")
    ),
    responses(
        (status = 200, description = "Food record with seasonal flag", body = SeasonalFood),
        (status = 404, description = "Unknown slug", body = ErrorRes)
    )
)]
/// Fetch a single food record by slug
///
/// # Errors
/// Returns `404 Not Found` if no record has the given slug.
#[axum::debug_handler]
async fn get_food(
    State(state): State<AppState>,
    AxumPath(slug): AxumPath<String>,
) -> Result<Json<SeasonalFood>, ApiError> {
    let food = state.store.by_slug(&slug)?;
    let current = Season::for_month0(Utc::now().month0());
    Ok(Json(SeasonalFood::derive(food.clone(), current)))
}

#[utoipa::path(
    post,
    path = "/foods",
    request_body = FavoriteReq,
    responses(
        (status = 200, description = "Favorite acknowledged", body = FavoriteRes),
        (status = 400, description = "Unrecognised action", body = ErrorRes),
        (status = 404, description = "Unknown food id", body = ErrorRes)
    )
)]
/// Acknowledge a favorite action
///
/// Favorites are owned by the client layer; this endpoint is a stub boundary
/// for a future persistence layer. It validates the action and the food id
/// but stores nothing server-side.
///
/// # Errors
/// Returns `400 Bad Request` for an unrecognised action or a missing food id,
/// and `404 Not Found` when the food id matches no record.
#[axum::debug_handler]
async fn favorite_food(
    State(state): State<AppState>,
    Json(req): Json<FavoriteReq>,
) -> Result<Json<FavoriteRes>, ApiError> {
    if req.action != "favorite" {
        tracing::warn!("unrecognised action: {}", req.action);
        return Err(ApiError::InvalidAction("Invalid action".into()));
    }

    let food_id = req
        .food_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidAction("Missing foodId".into()))?;

    if !state.store.all().iter().any(|food| food.id == food_id) {
        return Err(ApiError::NotFound("Food not found".into()));
    }

    Ok(Json(FavoriteRes {
        success: true,
        message: "Favorite updated".into(),
    }))
}
