use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Slug of the default/uncategorized classification. Never exposed through
/// listings, never filterable, never rendered as a category label.
pub const RESERVED_CATEGORY_SLUG: &str = "uncategorized";

/// A classification term grouping solution items. Read-only projection of the
/// underlying content store; only categories with at least one published
/// solution are ever listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub item_count: i64,
}

impl Category {
    /// Single predicate for the reserved-category exclusion. Every place that
    /// sources or validates categories goes through this.
    pub fn is_reserved(&self) -> bool {
        self.slug == RESERVED_CATEGORY_SLUG
    }
}

/// Resolve the display name for a possibly-missing category.
///
/// Missing and reserved categories both resolve to an empty name, so a label
/// for them never reaches rendered output.
pub fn display_name(category: Option<&Category>) -> String {
    match category {
        Some(category) if !category.is_reserved() => category.name.clone(),
        _ => String::new(),
    }
}

/// Category lookup key. Callers may address a category by numeric id or by
/// slug; both forms are accepted everywhere a category can be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelector {
    Id(i64),
    Slug(String),
}

impl CategorySelector {
    /// Parse a raw selector string: all-digits input is a numeric id,
    /// anything else is a slug.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Slug(trimmed.to_string()),
        }
    }
}

impl From<i64> for CategorySelector {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Slug(slug) => write!(f, "{slug}"),
        }
    }
}
