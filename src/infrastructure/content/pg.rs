use super::{ContentStore, SolutionRecord};
use crate::domain::category::{Category, CategorySelector};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;

/// Postgres-backed content store.
///
/// Two tables: `categories (id, slug, name)` and `solutions (id, title,
/// description, image_url, detail_url, category_id, status)`. Only rows with
/// `status = 'published'` are ever visible through this store.
pub struct PgContentStore {
    pool: Arc<DbPool>,
}

impl PgContentStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let pool = self.pool.as_ref();
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT c.id, c.slug, c.name, COUNT(s.id) AS item_count
            FROM categories c
            INNER JOIN solutions s
                ON s.category_id = c.id AND s.status = 'published'
            GROUP BY c.id, c.slug, c.name
            ORDER BY c.name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    async fn find_category(&self, selector: &CategorySelector) -> AppResult<Option<Category>> {
        let pool = self.pool.as_ref();
        let category = match selector {
            CategorySelector::Id(id) => {
                sqlx::query_as::<_, Category>(
                    r#"
                    SELECT c.id, c.slug, c.name,
                           (SELECT COUNT(*) FROM solutions s
                             WHERE s.category_id = c.id AND s.status = 'published') AS item_count
                    FROM categories c
                    WHERE c.id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(pool)
                .await?
            }
            CategorySelector::Slug(slug) => {
                sqlx::query_as::<_, Category>(
                    r#"
                    SELECT c.id, c.slug, c.name,
                           (SELECT COUNT(*) FROM solutions s
                             WHERE s.category_id = c.id AND s.status = 'published') AS item_count
                    FROM categories c
                    WHERE c.slug = $1
                    "#,
                )
                .bind(slug)
                .fetch_optional(pool)
                .await?
            }
        };

        Ok(category)
    }

    async fn solutions_by_category(
        &self,
        selector: Option<&CategorySelector>,
    ) -> AppResult<Vec<SolutionRecord>> {
        let pool = self.pool.as_ref();
        let records = match selector {
            None => {
                sqlx::query_as::<_, SolutionRecord>(
                    r#"
                    SELECT s.id, s.title, s.description, s.image_url, s.detail_url,
                           c.name AS category_name
                    FROM solutions s
                    INNER JOIN categories c ON c.id = s.category_id
                    WHERE s.status = 'published'
                    ORDER BY s.title ASC
                    "#,
                )
                .fetch_all(pool)
                .await?
            }
            Some(CategorySelector::Id(id)) => {
                sqlx::query_as::<_, SolutionRecord>(
                    r#"
                    SELECT s.id, s.title, s.description, s.image_url, s.detail_url,
                           c.name AS category_name
                    FROM solutions s
                    INNER JOIN categories c ON c.id = s.category_id
                    WHERE s.status = 'published' AND c.id = $1
                    ORDER BY s.title ASC
                    "#,
                )
                .bind(id)
                .fetch_all(pool)
                .await?
            }
            Some(CategorySelector::Slug(slug)) => {
                sqlx::query_as::<_, SolutionRecord>(
                    r#"
                    SELECT s.id, s.title, s.description, s.image_url, s.detail_url,
                           c.name AS category_name
                    FROM solutions s
                    INNER JOIN categories c ON c.id = s.category_id
                    WHERE s.status = 'published' AND c.slug = $1
                    ORDER BY s.title ASC
                    "#,
                )
                .bind(slug)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(records)
    }

    async fn ping(&self) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query("SELECT 1").fetch_one(pool).await?;
        Ok(())
    }
}
