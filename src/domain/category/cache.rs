use super::model::Category;
use crate::error::AppError;
use crate::infrastructure::content::ContentStore;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// How long a computed category listing stays valid.
pub const CATEGORY_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Time-bounded cache of the categories that have at least one published
/// solution item, sorted by name ascending, with the reserved category
/// removed.
///
/// Entries are built fully and then published atomically; a reader never
/// observes a partially written listing. Concurrent cold reads collapse into
/// a single content-store query, the rest await its result. A failed
/// recompute caches nothing.
pub struct CategoryCache {
    store: Arc<dyn ContentStore>,
    entries: Cache<(), Arc<Vec<Category>>>,
}

impl CategoryCache {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let entries = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATEGORY_CACHE_TTL)
            .build();

        Self { store, entries }
    }

    /// Return the cached category listing, recomputing it on miss or expiry.
    pub async fn get_categories(&self) -> Result<Arc<Vec<Category>>, AppError> {
        let store = self.store.clone();
        self.entries
            .try_get_with((), async move {
                let categories = store.list_categories().await?;
                let visible: Vec<Category> = categories
                    .into_iter()
                    .filter(|category| !category.is_reserved())
                    .collect();
                tracing::debug!(
                    count = visible.len(),
                    "categories fetched from content store and cached"
                );
                Ok::<_, AppError>(Arc::new(visible))
            })
            .await
            .map_err(|error: Arc<AppError>| {
                tracing::error!(error = %error, "category listing recompute failed");
                AppError::Internal(error.to_string())
            })
    }

    /// Drop the cached listing immediately. Called on process teardown and
    /// available to operators whenever the underlying taxonomy changes.
    pub async fn invalidate(&self) {
        self.entries.invalidate(&()).await;
        tracing::debug!("category cache invalidated");
    }
}
