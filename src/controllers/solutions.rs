use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

use crate::domain::filter::{FilterRequest, FilterResponse, FilterService};
use crate::domain::grid::GridComposer;

pub struct SolutionsController {
    composer: Arc<GridComposer>,
    filter_service: Arc<FilterService>,
}

impl SolutionsController {
    pub fn new(composer: Arc<GridComposer>, filter_service: Arc<FilterService>) -> Self {
        Self {
            composer,
            filter_service,
        }
    }

    /// GET /solutions - composed full grid for first page load
    pub async fn solutions_page(
        State(controller): State<Arc<SolutionsController>>,
    ) -> Html<String> {
        Html(controller.composer.compose_initial_grid().await)
    }

    /// GET /solutions/:category - single-category grid, addressed by slug or id
    pub async fn solutions_category_page(
        State(controller): State<Arc<SolutionsController>>,
        Path(category): Path<String>,
    ) -> Html<String> {
        Html(controller.composer.compose_category_grid(&category).await)
    }

    /// POST /filter - asynchronous category filter
    ///
    /// Always answers 200 with the success/failure envelope; handler errors
    /// never surface as HTTP errors.
    pub async fn filter(
        State(controller): State<Arc<SolutionsController>>,
        Json(request): Json<FilterRequest>,
    ) -> Json<FilterResponse> {
        let request_id = request.request_id.clone();
        match controller.filter_service.handle(&request).await {
            Ok(outcome) => Json(FilterResponse::success(outcome, request_id)),
            Err(error) => Json(FilterResponse::failure(error.to_string(), request_id)),
        }
    }
}
