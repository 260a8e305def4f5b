//! HTTP API handlers for the gateway.
//!
//! Controller layer: validate parameters, call the service, normalize the
//! uniform reply into the `{status, message, data}` envelope.
//!
//! The error-status mapping is deliberately uneven across endpoints (403 for
//! the lookup-style endpoints, 400 for the rest, a fixed message for geocode):
//! existing callers were built against this behaviour, so it is kept and
//! pinned by tests rather than made consistent.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::error::AppError;
use crate::metrics::Metrics;
use crate::model::{
    ApiEnvelope, CityParams, CollectionParams, CuisineParams, DailyMenuParams,
    EstablishmentParams, GeocodeParams, LocationDetailParams, LocationParams, RestaurantParams,
    ReviewParams, SearchParams, UpstreamReply,
};
use crate::service::ZomatoService;

#[derive(Clone)]
pub struct AppState {
    pub zomato: ZomatoService,
    pub metrics: Metrics,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/metrics", get(metrics))
        .route("/v1/zomato/cities", post(cities))
        .route("/v1/zomato/categories", get(categories))
        .route("/v1/zomato/collections", post(collections))
        .route("/v1/zomato/cuisines", post(cuisines))
        .route("/v1/zomato/establishments", post(establishments))
        .route("/v1/zomato/geocode", post(geocode))
        .route("/v1/zomato/locations", post(locations))
        .route("/v1/zomato/location-details", post(location_details))
        .route("/v1/zomato/restaurant", post(restaurant))
        .route("/v1/zomato/daily-menu", post(daily_menu))
        .route("/v1/zomato/reviews", post(reviews))
        .route("/v1/zomato/search", post(search))
        .with_state(state)
}

/// How a non-200 provider reply maps onto the caller-facing response.
#[derive(Clone, Copy)]
enum ErrorMode {
    /// HTTP 403, provider message, provider body as data.
    Forbidden,
    /// HTTP 400, provider message, no data.
    BadRequest,
    /// HTTP 400 with a fixed message, provider body ignored.
    Fixed(&'static str),
}

const FALLBACK_MESSAGE: &str = "Request failed";

fn relay(reply: UpstreamReply, mode: ErrorMode) -> Response {
    if reply.status_code == 200 {
        return (StatusCode::OK, Json(ApiEnvelope::success(reply.body))).into_response();
    }

    let (status, envelope) = match mode {
        ErrorMode::Forbidden => {
            let message = reply.message().unwrap_or(FALLBACK_MESSAGE).to_string();
            (
                StatusCode::FORBIDDEN,
                ApiEnvelope::error(403, message, reply.body),
            )
        }
        ErrorMode::BadRequest => {
            let message = reply.message().unwrap_or(FALLBACK_MESSAGE).to_string();
            (
                StatusCode::BAD_REQUEST,
                ApiEnvelope::error(400, message, Value::Null),
            )
        }
        ErrorMode::Fixed(message) => (
            StatusCode::BAD_REQUEST,
            ApiEnvelope::error(400, message, Value::Null),
        ),
    };

    (status, Json(envelope)).into_response()
}

/// Health check endpoint
async fn health() -> Result<Json<Value>, AppError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "service": "menugate",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Metrics endpoint
async fn metrics(State(state): State<AppState>) -> Result<String, AppError> {
    state.metrics.export()
}

async fn cities(
    State(state): State<AppState>,
    Json(params): Json<CityParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.cities(&params).await?;
    Ok(relay(reply, ErrorMode::Forbidden))
}

async fn categories(State(state): State<AppState>) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.categories().await?;
    Ok(relay(reply, ErrorMode::Forbidden))
}

async fn collections(
    State(state): State<AppState>,
    Json(params): Json<CollectionParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.collections(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn cuisines(
    State(state): State<AppState>,
    Json(params): Json<CuisineParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.cuisines(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn establishments(
    State(state): State<AppState>,
    Json(params): Json<EstablishmentParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.establishments(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn geocode(
    State(state): State<AppState>,
    Json(params): Json<GeocodeParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.geocode(&params).await?;
    Ok(relay(reply, ErrorMode::Fixed("Data not found")))
}

async fn locations(
    State(state): State<AppState>,
    Json(params): Json<LocationParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.locations(&params).await?;
    Ok(relay(reply, ErrorMode::Forbidden))
}

async fn location_details(
    State(state): State<AppState>,
    Json(params): Json<LocationDetailParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.location_details(&params).await?;
    Ok(relay(reply, ErrorMode::Forbidden))
}

async fn restaurant(
    State(state): State<AppState>,
    Json(params): Json<RestaurantParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.restaurant(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn daily_menu(
    State(state): State<AppState>,
    Json(params): Json<DailyMenuParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.daily_menu(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn reviews(
    State(state): State<AppState>,
    Json(params): Json<ReviewParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    params.validate()?;
    let reply = state.zomato.reviews(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}

async fn search(
    State(state): State<AppState>,
    Json(params): Json<SearchParams>,
) -> Result<Response, AppError> {
    state.metrics.record_request();
    let reply = state.zomato.search(&params).await?;
    Ok(relay(reply, ErrorMode::BadRequest))
}
