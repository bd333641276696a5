use serde::{Deserialize, Serialize};

/// A solution content item shaped for card display.
///
/// `excerpt` is always derived from `description` by the excerpt formatter.
/// Items may lack a detail link or an image; rendering tolerates both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub detail_url: Option<String>,
    pub category: String,
}
