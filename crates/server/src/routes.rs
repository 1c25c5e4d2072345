//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use portfolio_insights_core::PortfolioInsights;

use crate::handlers::{self, AppState};

/// Create the API router over a loaded holdings snapshot.
pub fn create_router(insights: PortfolioInsights) -> Router {
    let state = Arc::new(AppState { insights });

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Portfolio
        .nest("/api/portfolio", portfolio_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

fn portfolio_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(handlers::get_holdings))
        .route("/allocation", get(handlers::get_allocation))
        .route("/summary", get(handlers::get_summary))
        .route("/performance", get(handlers::get_performance))
}
