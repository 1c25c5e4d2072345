//! # Portfolio Insights Server
//!
//! Read-only REST API over a portfolio spreadsheet.
//!
//! ## Endpoints
//!
//! - `GET /api/portfolio/holdings`
//! - `GET /api/portfolio/allocation`
//! - `GET /api/portfolio/summary`
//! - `GET /api/portfolio/performance`
//! - `GET /health`
//!
//! The sheet is loaded once before the listener is bound; a sheet without a
//! header or data rows aborts start-up.

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use portfolio_insights_core::errors::CoreError;
use portfolio_insights_core::PortfolioInsights;

pub use config::{LogFormat, ServerConfig};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` controls filtering (default `info`). `log` records emitted by
/// the core crate are forwarded through the subscriber's log bridge.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// The portfolio server.
pub struct Server {
    config: ServerConfig,
    insights: PortfolioInsights,
}

impl Server {
    /// Create a server over an already loaded snapshot.
    pub fn new(config: ServerConfig, insights: PortfolioInsights) -> Self {
        Self { config, insights }
    }

    /// Load the configured data file and create the server.
    pub fn from_config(config: ServerConfig) -> Result<Self, CoreError> {
        info!("Loading portfolio from {}", config.data_file);
        let insights = PortfolioInsights::load_from_file(&config.data_file)?;
        info!("Portfolio ready with {} holdings", insights.holding_count());
        Ok(Self::new(config, insights))
    }

    /// Build the router with CORS and request tracing.
    pub fn router(&self) -> Router {
        routes::create_router(self.insights.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.listen_addr();
        info!("Listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

/// Any origin; the methods and headers browser clients send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
