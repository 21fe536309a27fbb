pub mod adapters;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod ports;
pub mod services;
pub mod startup;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, get_service},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::ports::InventoryRepository;
use crate::services::AlertsAggregator;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn InventoryRepository>,
    pub alerts: AlertsAggregator,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(repo: Arc<dyn InventoryRepository>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            alerts: AlertsAggregator::new(repo.clone()),
            repo,
            public_dir: public_dir.into(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let public_dir = state.public_dir.clone();

    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/login",
            get_service(ServeFile::new(public_dir.join("login.html")))
                .post(handlers::auth::login),
        )
        .route(
            "/dashboard",
            get_service(ServeFile::new(public_dir.join("dashboard.html"))),
        )
        .route("/health", get(handlers::health))
        .route("/api/stocks", get(handlers::inventory::list_stocks))
        .route(
            "/api/supplier-transactions",
            get(handlers::inventory::list_supplier_transactions),
        )
        .route(
            "/api/customer-transactions",
            get(handlers::inventory::list_customer_transactions),
        )
        .route("/api/reports", get(handlers::inventory::financial_report))
        .route("/api/alerts", get(handlers::alerts::get_alerts))
        .fallback_service(ServeDir::new(public_dir))
        .layer(axum::middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise restricted to the list.
pub fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        None => CorsLayer::permissive(),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
        }
    }
}
