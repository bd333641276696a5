/// Filter handler failures. The display string of each variant is exactly
/// the user-facing message the AJAX envelope carries; retrieval detail stays
/// in the log.
#[derive(Debug, thiserror::Error)]
pub enum FilterServiceError {
    #[error("Security check failed")]
    TokenMismatch,
    #[error("No category selected")]
    MissingCategory,
    #[error("Invalid category")]
    ReservedCategory,
    #[error("Error loading solutions")]
    Retrieval(String),
}
