pub mod cache;
pub mod model;

pub use cache::CategoryCache;
pub use model::{display_name, Category, CategorySelector, RESERVED_CATEGORY_SLUG};
