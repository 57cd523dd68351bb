use super::ScoringError;

/// Analysis handler errors. These are the only failures surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("could not resolve enough entities to compare: missing [{}], found [{}]", missing.join(", "), found.join(", "))]
    EntitiesNotFound {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
