pub mod memory;
pub mod pg;

pub use memory::{InMemoryContentStore, StoredSolution};
pub use pg::PgContentStore;

use crate::domain::category::{Category, CategorySelector};
use crate::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Typed row shape for one solution as the content store returns it.
///
/// Field access is typed once at this boundary; the domain layer never
/// looks fields up by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SolutionRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub detail_url: Option<String>,
    pub category_name: String,
}

/// Collaborator boundary to the content platform's storage engine.
///
/// Every method is a potential blocking I/O boundary and therefore fallible
/// and async. Implementations guarantee the documented ordering so callers
/// never re-sort.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Distinct categories attached to at least one published solution,
    /// name ascending, with per-category published-item counts. Empty
    /// categories are excluded; the reserved category is NOT filtered here
    /// (the category cache applies the exclusion predicate).
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Resolve a category by id or slug. `None` when nothing matches.
    async fn find_category(&self, selector: &CategorySelector) -> AppResult<Option<Category>>;

    /// Published solutions, title ascending. With a selector, only items in
    /// the matching category; a selector that resolves to no category yields
    /// an empty list.
    async fn solutions_by_category(
        &self,
        selector: Option<&CategorySelector>,
    ) -> AppResult<Vec<SolutionRecord>>;

    /// Cheap connectivity probe for readiness checks.
    async fn ping(&self) -> AppResult<()>;
}
