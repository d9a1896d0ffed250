//! Business API Server
//!
//! A CRUD API over an in-memory directory of businesses, seeded from a
//! static dataset at startup.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{load_seed, InMemoryBusinessRepository};
use app::BusinessService;
use config::Config;
use domain::entities::{Business, CountrySet};
use domain::validation::BusinessValidator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub business_service: Arc<BusinessService<InMemoryBusinessRepository>>,
}

impl AppState {
    /// Build the store from seed records.
    /// The allowed countries are fixed to those present in the seed.
    pub fn from_seed(seed: Vec<Business>) -> Self {
        let countries = CountrySet::from_businesses(&seed);
        tracing::info!(
            businesses = seed.len(),
            countries = countries.len(),
            "Seeded business store"
        );

        if countries.is_empty() {
            tracing::warn!("Seed dataset has no countries, every submitted business will be rejected");
        }

        let repo = Arc::new(InMemoryBusinessRepository::with_businesses(seed));
        let business_service = Arc::new(BusinessService::new(
            repo,
            BusinessValidator::new(countries),
        ));

        Self { business_service }
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/",
            get(handlers::list_businesses).post(handlers::create_business),
        )
        .route(
            "/:id/",
            get(handlers::get_business)
                .put(handlers::update_business)
                .delete(handlers::delete_business),
        )
        .fallback(handlers::not_found)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,business_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Business API...");

    let config = Config::from_env().context("Failed to load configuration")?;

    let seed = load_seed(config.seed_data_path.as_deref()).context("Failed to load seed dataset")?;
    let state = AppState::from_seed(seed);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
