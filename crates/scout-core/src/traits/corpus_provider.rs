use crate::errors::ScoutResult;
use crate::models::EntityRecord;

/// Source of the frozen corpus. Called once per process.
pub trait ICorpusProvider: Send + Sync {
    /// Return the full set of records.
    fn load(&self) -> ScoutResult<Vec<EntityRecord>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
