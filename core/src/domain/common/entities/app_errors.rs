use thiserror::Error;

use crate::domain::recipe::extraction::ExtractionError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Empty response from model")]
    EmptyModelOutput,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Invalid input: {0}")]
    Invalid(String),
}
