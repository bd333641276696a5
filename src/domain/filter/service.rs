use super::error::FilterServiceError;
use super::FilterRequest;
use crate::domain::category::{display_name, CategorySelector};
use crate::domain::grid::render::render_grid_items;
use crate::domain::solution::{SolutionService, SolutionServiceApi};
use crate::infrastructure::content::ContentStore;
use std::sync::Arc;

/// Successful filter outcome, ready for the response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSuccess {
    pub html: String,
    pub count: usize,
    pub category_name: String,
}

/// One-shot handler for asynchronous category-filter requests.
///
/// A request moves Received -> Validated -> Resolved -> Responded; every
/// early exit becomes a structured failure message, never an exception past
/// this boundary. No retries here; the client owns retry policy.
pub struct FilterService {
    store: Arc<dyn ContentStore>,
    solutions: Arc<SolutionService>,
    filter_token: String,
}

impl FilterService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        solutions: Arc<SolutionService>,
        filter_token: String,
    ) -> Self {
        Self {
            store,
            solutions,
            filter_token,
        }
    }

    pub async fn handle(&self, request: &FilterRequest) -> Result<FilterSuccess, FilterServiceError> {
        // Received -> Validated
        if request.token != self.filter_token {
            tracing::warn!("filter request failed the token check");
            return Err(FilterServiceError::TokenMismatch);
        }
        if request.category <= 0 {
            tracing::warn!(category = request.category, "filter request without a category");
            return Err(FilterServiceError::MissingCategory);
        }

        // Validated -> Resolved. A category that resolves to nothing is a
        // valid empty state; only the reserved category is rejected.
        let selector = CategorySelector::Id(request.category);
        let category = self.store.find_category(&selector).await.map_err(|error| {
            tracing::error!(%error, category = request.category, "category resolution failed");
            FilterServiceError::Retrieval(error.to_string())
        })?;

        if category.as_ref().map_or(false, |c| c.is_reserved()) {
            tracing::warn!(category = request.category, "reserved category requested");
            return Err(FilterServiceError::ReservedCategory);
        }

        let items = self
            .solutions
            .get_by_category(Some(&selector))
            .await
            .map_err(|error| {
                tracing::error!(%error, category = request.category, "solution retrieval failed");
                FilterServiceError::Retrieval(error.to_string())
            })?;

        // Resolved -> Responded
        Ok(FilterSuccess {
            html: render_grid_items(&items),
            count: items.len(),
            category_name: display_name(category.as_ref()),
        })
    }
}
