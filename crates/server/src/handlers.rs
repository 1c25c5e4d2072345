//! Request handlers.
//!
//! Every handler reads from the shared, immutable holdings snapshot and runs
//! the aggregation synchronously; no handler mutates state.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use serde::Serialize;

use portfolio_insights_core::models::allocation::AllocationResult;
use portfolio_insights_core::models::holding::Holding;
use portfolio_insights_core::models::performance::PerformanceResult;
use portfolio_insights_core::models::summary::SummaryResult;
use portfolio_insights_core::PortfolioInsights;

use crate::error::ApiError;

/// Application state.
pub struct AppState {
    /// Holdings snapshot loaded at start-up
    pub insights: PortfolioInsights,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    holdings: usize,
}

/// Health check handler.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        holdings: state.insights.holding_count(),
    })
}

/// `GET /api/portfolio/holdings`
pub async fn get_holdings(State(state): State<Arc<AppState>>) -> Json<Vec<Holding>> {
    Json(state.insights.get_holdings().to_vec())
}

/// `GET /api/portfolio/allocation`
pub async fn get_allocation(State(state): State<Arc<AppState>>) -> Json<AllocationResult> {
    Json(state.insights.get_allocation())
}

/// `GET /api/portfolio/summary`
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResult> {
    Json(state.insights.get_summary())
}

/// `GET /api/portfolio/performance`
pub async fn get_performance(State(state): State<Arc<AppState>>) -> Json<PerformanceResult> {
    Json(state.insights.get_performance())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
