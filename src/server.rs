//! HTTP forecast service.
//!
//! Routes:
//! - `POST /forecast` `{ "series": [..], "steps": 3 }` -> `{ "forecast": [..] }`
//! - `POST /forecast/chart` `{ "products": [..], "steps": 3 }` -> chart payload
//! - `GET /health`

use crate::chart::ForecastChart;
use crate::config::{validate_horizon, ForecastConfig};
use crate::core::ensure_finite;
use crate::error::{ForecastError, Result};
use crate::models::forecast;
use crate::sales::{monthly_revenue, Product};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    config: ForecastConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub series: Vec<f64>,
    #[serde(default)]
    pub steps: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartRequest {
    pub products: Vec<Product>,
    #[serde(default)]
    pub steps: Option<usize>,
}

/// Error body returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wraps library errors so handlers can use `?`.
#[derive(Debug)]
pub struct ApiError(ForecastError);

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(ForecastError::Parse(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ForecastError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        warn!(%status, error = %self.0, "request rejected");
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl AppState {
    fn horizon(&self, steps: Option<usize>) -> Result<usize> {
        let horizon = steps.unwrap_or(self.config.horizon);
        validate_horizon(horizon)?;
        Ok(horizon)
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn forecast_series(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ForecastRequest>, JsonRejection>,
) -> std::result::Result<Json<ForecastResponse>, ApiError> {
    let Json(req) = payload?;
    let horizon = state.horizon(req.steps)?;
    ensure_finite(&req.series)?;

    Ok(Json(ForecastResponse {
        forecast: forecast(&req.series, horizon),
    }))
}

async fn forecast_chart(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ChartRequest>, JsonRejection>,
) -> std::result::Result<Json<ForecastChart>, ApiError> {
    let Json(req) = payload?;
    let horizon = state.horizon(req.steps)?;
    let series = monthly_revenue(&req.products)?;
    series.ensure_finite()?;

    Ok(Json(ForecastChart::build(&series, horizon)))
}

/// Build the service router.
pub fn router(config: ForecastConfig) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/health", get(health))
        .route("/forecast", post(forecast_series))
        .route("/forecast/chart", post(forecast_chart))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: ForecastConfig) -> Result<()> {
    config.validate()?;
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    let app = router(config);

    info!("sales-forecast v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);
    axum::serve(listener, app).await?;
    Ok(())
}
