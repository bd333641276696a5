use super::error::SolutionServiceError;
use super::excerpt::format_excerpt;
use super::model::SolutionItem;
use crate::domain::category::CategorySelector;
use crate::infrastructure::content::{ContentStore, SolutionRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Query + transform layer over the content store. Owns no state; every call
/// reflects current storage.
pub struct SolutionService {
    store: Arc<dyn ContentStore>,
}

impl SolutionService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
pub trait SolutionServiceApi: Send + Sync {
    /// Fetch published solution items, title ascending.
    ///
    /// With a selector, only items whose category matches the given id or
    /// slug are returned (exact match). Without one, all published items.
    /// Storage failures propagate whole; no partial result is ever returned.
    async fn get_by_category(
        &self,
        selector: Option<&CategorySelector>,
    ) -> Result<Vec<SolutionItem>, SolutionServiceError>;
}

#[async_trait]
impl SolutionServiceApi for SolutionService {
    async fn get_by_category(
        &self,
        selector: Option<&CategorySelector>,
    ) -> Result<Vec<SolutionItem>, SolutionServiceError> {
        match selector {
            Some(selector) => tracing::debug!(category = %selector, "fetching solutions"),
            None => tracing::debug!("fetching all solutions"),
        }

        let records = self
            .store
            .solutions_by_category(selector)
            .await
            .map_err(|e| SolutionServiceError::Dependency(e.to_string()))?;

        Ok(records.into_iter().map(format_item).collect())
    }
}

/// Build the display-ready item from a typed store record.
fn format_item(record: SolutionRecord) -> SolutionItem {
    let detail_url = record.detail_url.filter(|link| !link.trim().is_empty());
    if detail_url.is_none() {
        tracing::warn!(
            solution_id = record.id,
            title = %record.title,
            "solution has no find-out-more link"
        );
    }

    SolutionItem {
        id: record.id,
        title: record.title,
        excerpt: format_excerpt(&record.description),
        description: record.description,
        image_url: record.image_url,
        detail_url,
        category: record.category_name,
    }
}
