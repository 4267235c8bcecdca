use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

pub type RagResult<T> = Result<T, RagError>;
