use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solutions_backend::controllers::solutions::SolutionsController;
use solutions_backend::domain::category::CategoryCache;
use solutions_backend::domain::filter::FilterService;
use solutions_backend::domain::grid::GridComposer;
use solutions_backend::domain::solution::SolutionService;
use solutions_backend::infrastructure::config::{Config, LogFormat};
use solutions_backend::infrastructure::content::{ContentStore, PgContentStore};
use solutions_backend::infrastructure::db::create_pool;
use solutions_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Solutions Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Content store over the pool
    let store: Arc<dyn ContentStore> = Arc::new(PgContentStore::new(Arc::new(pool)));

    // Verify storage connectivity before serving
    store.ping().await?;
    tracing::info!("Content store connection verified");

    // 2. Instantiate services (inject the store)
    tracing::info!("Instantiating services...");
    let category_cache = Arc::new(CategoryCache::new(store.clone()));
    let solution_service = Arc::new(SolutionService::new(store.clone()));
    let filter_service = Arc::new(FilterService::new(
        store.clone(),
        solution_service.clone(),
        config.filter_token.clone(),
    ));
    let grid_composer = Arc::new(GridComposer::new(
        category_cache.clone(),
        solution_service.clone(),
        store.clone(),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let solutions_controller = Arc::new(SolutionsController::new(grid_composer, filter_service));

    // Start HTTP server with all routes
    start_http_server(store, config, category_cache, solutions_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let default_filter = if config.debug {
        "solutions_backend=debug,tower_http=debug"
    } else {
        "solutions_backend=warn"
    };

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default_filter.into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
