use crate::models::ErrorKind;

/// Classifier tier errors. Always absorbed by the tier policy.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("external interpreter {interpreter} failed: {reason}")]
    ExternalService { interpreter: String, reason: String },

    #[error("external interpreter {interpreter} timed out after {timeout_ms}ms")]
    Timeout { interpreter: String, timeout_ms: u64 },

    #[error("interpretation payload rejected: {reason}")]
    Validation { reason: String },

    #[error("interpreter unavailable: {interpreter}")]
    Unavailable { interpreter: String },
}

impl ClassificationError {
    /// Envelope error kind this failure is recorded under.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::ValidationFailure,
            Self::ExternalService { .. } | Self::Timeout { .. } | Self::Unavailable { .. } => {
                ErrorKind::ExternalServiceFailure
            }
        }
    }
}
