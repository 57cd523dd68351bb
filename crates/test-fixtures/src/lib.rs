//! Test fixture loader for the Scout workspace: the fixture corpus,
//! canned interpreter payloads, and mock interpreters.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use scout_core::corpus::{CorpusSnapshot, JsonCorpusProvider};
use scout_core::errors::ClassificationError;
use scout_core::models::EntityRecord;
use scout_core::traits::{ICorpusProvider, IInterpreter, InterpretationRequest};

/// Fixture corpus path relative to the fixtures root.
pub const PLAYERS: &str = "corpus/players.json";

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// A provider over the fixture corpus.
pub fn fixture_provider() -> JsonCorpusProvider {
    JsonCorpusProvider::new(fixture_path(PLAYERS))
}

/// All fixture corpus records.
pub fn fixture_corpus() -> Vec<EntityRecord> {
    fixture_provider()
        .load()
        .unwrap_or_else(|e| panic!("Failed to load fixture corpus: {e}"))
}

/// A fresh snapshot over the fixture corpus.
pub fn fixture_snapshot() -> CorpusSnapshot {
    CorpusSnapshot::new(fixture_corpus())
}

/// Interpreter that returns a fixed payload and counts calls.
pub struct StaticInterpreter {
    payload: serde_json::Value,
    calls: AtomicUsize,
}

impl StaticInterpreter {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
        }
    }

    /// Interpreter answering with the payload stored at `relative_path`.
    pub fn from_fixture(relative_path: &str) -> Self {
        Self::new(load_fixture_value(relative_path))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IInterpreter for StaticInterpreter {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }

    fn name(&self) -> &str {
        "static-mock"
    }
}

/// Interpreter that sleeps before answering; used to trip the timeout.
pub struct SlowInterpreter {
    delay: Duration,
    payload: serde_json::Value,
}

impl SlowInterpreter {
    pub fn new(delay: Duration, payload: serde_json::Value) -> Self {
        Self { delay, payload }
    }
}

#[async_trait]
impl IInterpreter for SlowInterpreter {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.payload.clone())
    }

    fn name(&self) -> &str {
        "slow-mock"
    }
}

/// Interpreter whose calls always fail at the transport level.
pub struct FailingInterpreter;

#[async_trait]
impl IInterpreter for FailingInterpreter {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError> {
        Err(ClassificationError::ExternalService {
            interpreter: "failing-mock".to_string(),
            reason: "connection refused".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing-mock"
    }
}

/// Interpreter that reports itself unavailable.
pub struct OfflineInterpreter;

#[async_trait]
impl IInterpreter for OfflineInterpreter {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError> {
        Err(ClassificationError::Unavailable {
            interpreter: "offline-mock".to_string(),
        })
    }

    fn name(&self) -> &str {
        "offline-mock"
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "fixture directory not found");
    }

    #[test]
    fn all_interpretation_fixtures_exist() {
        let files = [
            "corpus/interpretations/tactical_alongside_mainoo.json",
            "corpus/interpretations/compare_single_name.json",
            "corpus/interpretations/tactical_wrong_types.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn fixture_corpus_has_scenario_entities() {
        let snapshot = fixture_snapshot();
        assert!(snapshot.len() >= 20);
        for name in ["Erling Haaland", "Kylian Mbappé", "Kobbie Mainoo"] {
            assert!(
                snapshot.records().iter().any(|r| r.name == name),
                "missing {name}"
            );
        }
        let ligue1_mids = snapshot
            .records()
            .iter()
            .filter(|r| r.league == "FRA-Ligue 1" && r.position == "Midfielder")
            .count();
        assert!(ligue1_mids >= 3);
    }

    #[test]
    fn every_record_has_finite_metrics() {
        for record in fixture_corpus() {
            assert!(record.metrics.values().all(|v| v.is_finite()), "{}", record.name);
        }
    }

    #[tokio::test]
    async fn static_interpreter_counts_calls() {
        let interpreter = StaticInterpreter::new(serde_json::json!({"request_type": "search"}));
        let request = InterpretationRequest {
            query: "q".into(),
            schema: serde_json::Value::Null,
        };
        interpreter.interpret(&request).await.unwrap();
        interpreter.interpret(&request).await.unwrap();
        assert_eq!(interpreter.calls(), 2);
    }
}
