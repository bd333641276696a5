use super::render::{render_category_select, render_error, render_grid_items};
use crate::domain::category::{CategoryCache, CategorySelector, RESERVED_CATEGORY_SLUG};
use crate::domain::solution::{SolutionService, SolutionServiceApi};
use crate::infrastructure::content::ContentStore;
use std::sync::Arc;
use uuid::Uuid;

/// Slug that overrides first-in-sort-order as the initial category whenever
/// it exists. Fixed business rule, not configurable per call.
pub const DEFAULT_CATEGORY_SLUG: &str = "use-case";

/// Assembles the full grid fragments for first page load. Composition never
/// fails the surrounding page: every failure degrades to an inline error
/// paragraph, with detail going to the log only.
pub struct GridComposer {
    categories: Arc<CategoryCache>,
    solutions: Arc<SolutionService>,
    store: Arc<dyn ContentStore>,
}

impl GridComposer {
    pub fn new(
        categories: Arc<CategoryCache>,
        solutions: Arc<SolutionService>,
        store: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            categories,
            solutions,
            store,
        }
    }

    /// Compose the initial full grid: header, category selector with the
    /// default pre-selected, and the default category's items.
    ///
    /// The container id is unique per composition so several grids can
    /// coexist on one page without the client scripts colliding.
    pub async fn compose_initial_grid(&self) -> String {
        let categories = match self.categories.get_categories().await {
            Ok(categories) => categories,
            Err(error) => {
                tracing::error!(%error, "failed to load categories for the solutions grid");
                return render_error("Error displaying solutions.");
            }
        };

        if categories.is_empty() {
            tracing::warn!("no solution categories found");
            return render_error("No solution categories found.");
        }

        let default_category = categories
            .iter()
            .find(|category| category.slug == DEFAULT_CATEGORY_SLUG)
            .unwrap_or(&categories[0]);

        let items = match self
            .solutions
            .get_by_category(Some(&CategorySelector::Id(default_category.id)))
            .await
        {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(%error, "failed to load solutions for the default category");
                return render_error("Error displaying solutions.");
            }
        };

        let container_id = format!("solutions-container-{}", Uuid::new_v4().simple());
        let select = render_category_select(&categories, default_category.id);
        let grid = render_grid_items(&items);

        format!(
            "<div class=\"solutions-container\" id=\"{container_id}\">\
<div class=\"solutions-header\">\
<h2 class=\"solutions-title\">Solution By</h2>\
<div class=\"solutions-filter\">{select}</div>\
</div>\
<div class=\"solutions-grid\">{grid}</div>\
</div>"
        )
    }

    /// Compose a single-category grid for the direct category entry point.
    pub async fn compose_category_grid(&self, selector: &str) -> String {
        let raw = selector.trim();
        if raw.is_empty() {
            tracing::warn!("no category specified for the category grid");
            return render_error("No category specified for solutions.");
        }

        let selector = CategorySelector::parse(raw);
        let resolved = match self.store.find_category(&selector).await {
            Ok(resolved) => resolved,
            Err(error) => {
                tracing::error!(%error, category = %selector, "category lookup failed");
                return render_error("Error displaying solutions.");
            }
        };

        let reserved_requested =
            matches!(&selector, CategorySelector::Slug(slug) if slug == RESERVED_CATEGORY_SLUG)
                || resolved.as_ref().map_or(false, |c| c.is_reserved());
        if reserved_requested {
            tracing::warn!(category = %selector, "reserved category requested");
            return render_error("Invalid category specified.");
        }

        let items = match self.solutions.get_by_category(Some(&selector)).await {
            Ok(items) => items,
            Err(error) => {
                tracing::error!(%error, category = %selector, "failed to load category solutions");
                return render_error("Error displaying solutions.");
            }
        };

        let grid = if items.is_empty() {
            tracing::warn!(category = %selector, "no solutions found for category");
            "<p class=\"solutions-empty\">No solutions found for this category.</p>".to_string()
        } else {
            render_grid_items(&items)
        };

        format!(
            "<div class=\"solutions-category-container\">\
<div class=\"solutions-grid\">{grid}</div>\
</div>"
        )
    }
}
