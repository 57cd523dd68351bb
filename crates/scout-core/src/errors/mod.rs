mod classification_error;
mod corpus_error;
mod handler_error;
mod scoring_error;

pub use classification_error::ClassificationError;
pub use corpus_error::CorpusError;
pub use handler_error::HandlerError;
pub use scoring_error::ScoringError;

/// Top-level error for the Scout pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("classification error: {0}")]
    ClassificationError(#[from] ClassificationError),

    #[error("handler error: {0}")]
    HandlerError(#[from] HandlerError),

    #[error("scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("corpus error: {0}")]
    CorpusError(#[from] CorpusError),

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type ScoutResult<T> = Result<T, ScoutError>;
