pub mod error;
pub mod excerpt;
pub mod model;
pub mod service;

pub use error::SolutionServiceError;
pub use excerpt::format_excerpt;
pub use model::SolutionItem;
pub use service::{SolutionService, SolutionServiceApi};
