use super::{ContentStore, SolutionRecord};
use crate::domain::category::{Category, CategorySelector};
use crate::error::AppResult;
use async_trait::async_trait;

/// One stored solution row for the in-memory store. Builder-style setters
/// keep fixture setup readable.
#[derive(Debug, Clone)]
pub struct StoredSolution {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub detail_url: Option<String>,
    pub category_id: i64,
    pub published: bool,
}

impl StoredSolution {
    pub fn new(id: i64, title: &str, description: &str, category_id: i64) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image_url: None,
            detail_url: None,
            category_id,
            published: true,
        }
    }

    pub fn image_url(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_string());
        self
    }

    pub fn detail_url(mut self, url: &str) -> Self {
        self.detail_url = Some(url.to_string());
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }
}

#[derive(Debug, Clone)]
struct StoredCategory {
    id: i64,
    slug: String,
    name: String,
}

/// Content store backed by plain vectors. Used as the fixture store in tests
/// and for running the service without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    categories: Vec<StoredCategory>,
    solutions: Vec<StoredSolution>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: i64, slug: &str, name: &str) -> Self {
        self.categories.push(StoredCategory {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_solution(mut self, solution: StoredSolution) -> Self {
        self.solutions.push(solution);
        self
    }

    fn lookup(&self, selector: &CategorySelector) -> Option<&StoredCategory> {
        self.categories.iter().find(|c| match selector {
            CategorySelector::Id(id) => c.id == *id,
            CategorySelector::Slug(slug) => c.slug == *slug,
        })
    }

    fn published_count(&self, category_id: i64) -> i64 {
        self.solutions
            .iter()
            .filter(|s| s.published && s.category_id == category_id)
            .count() as i64
    }

    fn category_of(&self, solution: &StoredSolution) -> Option<&StoredCategory> {
        self.categories.iter().find(|c| c.id == solution.category_id)
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .map(|c| Category {
                id: c.id,
                slug: c.slug.clone(),
                name: c.name.clone(),
                item_count: self.published_count(c.id),
            })
            .filter(|c| c.item_count > 0)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(categories)
    }

    async fn find_category(&self, selector: &CategorySelector) -> AppResult<Option<Category>> {
        Ok(self.lookup(selector).map(|c| Category {
            id: c.id,
            slug: c.slug.clone(),
            name: c.name.clone(),
            item_count: self.published_count(c.id),
        }))
    }

    async fn solutions_by_category(
        &self,
        selector: Option<&CategorySelector>,
    ) -> AppResult<Vec<SolutionRecord>> {
        let category_id = match selector {
            Some(selector) => match self.lookup(selector) {
                Some(category) => Some(category.id),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let mut records: Vec<SolutionRecord> = self
            .solutions
            .iter()
            .filter(|s| s.published)
            .filter(|s| category_id.map_or(true, |id| s.category_id == id))
            .map(|s| SolutionRecord {
                id: s.id,
                title: s.title.clone(),
                description: s.description.clone(),
                image_url: s.image_url.clone(),
                detail_url: s.detail_url.clone(),
                category_name: self
                    .category_of(s)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
            })
            .collect();
        records.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(records)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
