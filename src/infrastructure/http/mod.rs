pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, solutions::SolutionsController};
use crate::domain::category::CategoryCache;
use crate::infrastructure::config::Config;
use crate::infrastructure::content::ContentStore;

/// Assemble the application router. Public so integration tests can exercise
/// the exact routing and middleware the binary serves.
pub fn build_router(
    store: Arc<dyn ContentStore>,
    solutions_controller: Arc<SolutionsController>,
) -> Router {
    let solutions_routes = Router::new()
        .route("/solutions", get(SolutionsController::solutions_page))
        .route(
            "/solutions/:category",
            get(SolutionsController::solutions_category_page),
        )
        .route("/filter", post(SolutionsController::filter))
        .with_state(solutions_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(store)
        .merge(solutions_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    store: Arc<dyn ContentStore>,
    config: Arc<Config>,
    category_cache: Arc<CategoryCache>,
    solutions_controller: Arc<SolutionsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(store, solutions_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(category_cache))
        .await?;

    Ok(())
}

/// Resolve on shutdown signal; tears down the category cache first, the
/// process-lifecycle analog of the platform's deactivation cleanup.
async fn shutdown_signal(category_cache: Arc<CategoryCache>) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install the shutdown signal handler");
        std::future::pending::<()>().await;
    }

    tracing::info!("shutdown signal received");
    category_cache.invalidate().await;
}
