/// Corpus snapshot loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus from {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse corpus: {reason}")]
    Parse { reason: String },

    #[error("corpus snapshot already initialized")]
    AlreadyInitialized,

    #[error("corpus snapshot not initialized")]
    NotInitialized,
}
