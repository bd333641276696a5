use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SolutionServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SolutionServiceError {
    fn from(err: AppError) -> Self {
        SolutionServiceError::Dependency(err.to_string())
    }
}

impl From<SolutionServiceError> for AppError {
    fn from(err: SolutionServiceError) -> Self {
        match err {
            SolutionServiceError::Dependency(msg) => AppError::Internal(msg),
            SolutionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
