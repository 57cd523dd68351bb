use std::path::PathBuf;

use crate::errors::{CorpusError, ScoutResult};
use crate::models::EntityRecord;
use crate::traits::ICorpusProvider;

/// Loads a corpus from a JSON array of `EntityRecord`s written by the
/// data pipeline.
#[derive(Debug, Clone)]
pub struct JsonCorpusProvider {
    path: PathBuf,
}

impl JsonCorpusProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse records from an in-memory JSON document.
    pub fn parse(json: &str) -> ScoutResult<Vec<EntityRecord>> {
        serde_json::from_str(json).map_err(|e| {
            CorpusError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl ICorpusProvider for JsonCorpusProvider {
    fn load(&self) -> ScoutResult<Vec<EntityRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| CorpusError::Io {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ScoutError;

    #[test]
    fn parse_reads_records_with_optional_fields() {
        let json = r#"[{"name":"A","team":"T","league":"L","position":"Midfielder","age":20,"minutes":900}]"#;
        let records = JsonCorpusProvider::parse(json).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].metrics.is_empty());
        assert_eq!(records[0].nationality, None);
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = JsonCorpusProvider::parse("{not json").unwrap_err();
        assert!(matches!(err, ScoutError::CorpusError(CorpusError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let provider = JsonCorpusProvider::new("/definitely/not/here.json");
        let err = provider.load().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
