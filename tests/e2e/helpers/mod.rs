use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use solutions_backend::controllers::solutions::SolutionsController;
use solutions_backend::domain::category::CategoryCache;
use solutions_backend::domain::filter::FilterService;
use solutions_backend::domain::grid::GridComposer;
use solutions_backend::domain::solution::SolutionService;
use solutions_backend::infrastructure::content::{
    ContentStore, InMemoryContentStore, StoredSolution,
};
use solutions_backend::infrastructure::http::build_router;

pub const TEST_FILTER_TOKEN: &str = "test-filter-token";

/// Store with the taxonomy every scenario leans on: two real categories,
/// the reserved one, one item without a detail link, one unpublished item.
pub fn seeded_store() -> InMemoryContentStore {
    InMemoryContentStore::new()
        .with_category(1, "use-case", "Use Case")
        .with_category(2, "industry", "Industry")
        .with_category(3, "region", "Region")
        .with_category(9, "uncategorized", "Uncategorized")
        .with_solution(
            StoredSolution::new(10, "Connect Suite", "<p>Connects everything.</p>", 1)
                .detail_url("/solutions/connect-suite")
                .image_url("https://cdn.example.com/connect.png"),
        )
        .with_solution(
            StoredSolution::new(11, "Asset Tracker", "Tracks assets in the field.", 1)
                .detail_url("/solutions/asset-tracker"),
        )
        .with_solution(
            StoredSolution::new(20, "Banking Cloud", "Core banking, hosted.", 2)
                .detail_url("/solutions/banking-cloud"),
        )
        .with_solution(StoredSolution::new(21, "Agri Sense", "Sensors for farming.", 2))
        .with_solution(StoredSolution::new(30, "Draft Thing", "Not ready yet.", 1).unpublished())
        .with_solution(StoredSolution::new(90, "Stray", "Should stay hidden.", 9))
}

/// Wire the full application router over an in-memory store, exactly as the
/// binary wires it over Postgres.
pub fn build_app(store: InMemoryContentStore) -> Router {
    let store: Arc<dyn ContentStore> = Arc::new(store);
    let category_cache = Arc::new(CategoryCache::new(store.clone()));
    let solution_service = Arc::new(SolutionService::new(store.clone()));
    let filter_service = Arc::new(FilterService::new(
        store.clone(),
        solution_service.clone(),
        TEST_FILTER_TOKEN.to_string(),
    ));
    let grid_composer = Arc::new(GridComposer::new(
        category_cache,
        solution_service,
        store.clone(),
    ));
    let solutions_controller = Arc::new(SolutionsController::new(grid_composer, filter_service));

    build_router(store, solutions_controller)
}

pub async fn get_response(app: &Router, path: &str) -> Response<axum::body::Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, String) {
    let response = get_response(app, path).await;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf8 body"))
}

pub async fn post_json(app: &Router, path: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}
