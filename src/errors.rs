use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Request was considered invalid due to error: {0}")]
    InvalidRequest(#[from] anyhow::Error),
    #[error("Error while writing estimate outputs: {0}")]
    ErrorInPostprocessing(#[from] PostprocessingError),
}

#[derive(Debug, Error)]
#[error(transparent)]
pub struct PostprocessingError {
    error: anyhow::Error,
}

impl PostprocessingError {
    pub fn new(error: anyhow::Error) -> Self {
        Self { error }
    }
}
