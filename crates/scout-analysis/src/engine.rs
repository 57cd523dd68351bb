//! `ScoutEngine`: the single entry point wiring classifier, router,
//! formatter, result cache, and query log.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

use scout_classifier::{HttpInterpreter, QueryClassifier};
use scout_core::config::ScoutConfig;
use scout_core::corpus::{CorpusSnapshot, SnapshotCell};
use scout_core::errors::ScoutResult;
use scout_core::models::{
    ClassificationResult, Diagnostics, ErrorKind, ResultData, ResultEnvelope,
};
use scout_core::traits::{ICorpusProvider, IInterpreter};
use scout_observability::{MetricsCollector, QueryLog, QueryLogEntry};
use tracing::{info, warn, Instrument};

use crate::cache::ResultCache;
use crate::formatter::ResponseFormatter;
use crate::router::AnalysisRouter;

pub struct ScoutEngine {
    classifier: QueryClassifier,
    router: AnalysisRouter,
    formatter: ResponseFormatter,
    cache: Option<ResultCache>,
    query_log: Mutex<QueryLog>,
    metrics: Mutex<MetricsCollector>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ScoutEngine {
    /// Build an engine over an already-loaded snapshot.
    pub fn new(
        config: ScoutConfig,
        snapshot: CorpusSnapshot,
        interpreter: Option<Arc<dyn IInterpreter>>,
    ) -> Self {
        let classifier = QueryClassifier::new(&config.classifier, snapshot, interpreter);
        let formatter = ResponseFormatter::new(config.router.narrative_max_rows);
        let router = AnalysisRouter::new(
            config.router,
            config.scoring,
            config.classifier.fuzzy_match_threshold,
        );
        Self {
            classifier,
            router,
            formatter,
            cache: ResultCache::from_config(&config.cache),
            query_log: Mutex::new(QueryLog::with_capacity(config.observability.query_log_capacity)),
            metrics: Mutex::new(MetricsCollector::new()),
        }
    }

    /// Load the corpus through `cell` (once per process) and attach the
    /// HTTP interpreter when it is enabled in config.
    pub fn from_provider(
        config: ScoutConfig,
        cell: &SnapshotCell,
        provider: &dyn ICorpusProvider,
    ) -> ScoutResult<Self> {
        let snapshot = cell.get_or_load(provider)?.clone();
        let interpreter: Option<Arc<dyn IInterpreter>> = config
            .interpreter
            .enabled
            .then(|| Arc::new(HttpInterpreter::from_config(&config.interpreter)) as Arc<dyn IInterpreter>);
        info!(
            version = scout_core::constants::VERSION,
            records = snapshot.len(),
            interpreter = interpreter.is_some(),
            "scout engine ready"
        );
        Ok(Self::new(config, snapshot, interpreter))
    }

    pub fn snapshot(&self) -> &CorpusSnapshot {
        self.classifier.snapshot()
    }

    /// Interpret and answer one query. Never fails: classifier trouble
    /// ends in the fallback, handler errors in `success = false`.
    pub async fn process(&self, query: &str) -> ResultEnvelope {
        let span = scout_observability::pipeline_span!(query);
        self.process_inner(query).instrument(span).await
    }

    async fn process_inner(&self, query: &str) -> ResultEnvelope {
        let started = Instant::now();
        let classification = self
            .classifier
            .classify(query)
            .instrument(scout_observability::classify_span!(query))
            .await;
        lock(&self.metrics).classification.record(&classification);

        let cache_key = classification
            .is_resolved()
            .then(|| ResultCache::key(query, &classification.request));
        let cached = match (&self.cache, &cache_key) {
            (Some(cache), Some(key)) => cache.get(key),
            _ => None,
        };
        let cache_hit = cached.is_some();

        let outcome: Result<ResultData, _> = match cached {
            Some(data) => Ok(data),
            None => self
                .router
                .route(&classification.request, self.classifier.snapshot())
                .map(|output| self.formatter.format(&classification.request, output)),
        };

        let envelope = match outcome {
            Ok(data) => {
                if let (false, Some(cache), Some(key)) = (cache_hit, &self.cache, cache_key) {
                    cache.insert(key, data.clone());
                }
                ResultEnvelope {
                    success: true,
                    data: Some(data),
                    error: None,
                    diagnostics: diagnostics(&classification, cache_hit, started),
                }
            }
            Err(e) => {
                warn!(
                    request = classification.request.kind(),
                    error = %e,
                    "handler failed"
                );
                ResultEnvelope {
                    success: false,
                    data: None,
                    error: Some(self.formatter.failure(&e)),
                    diagnostics: diagnostics(&classification, cache_hit, started),
                }
            }
        };

        self.record(query, &classification, &envelope, started);
        envelope
    }

    fn record(
        &self,
        query: &str,
        classification: &ClassificationResult,
        envelope: &ResultEnvelope,
        started: Instant,
    ) {
        let mut failures: Vec<ErrorKind> =
            classification.degradations.iter().map(|d| d.kind).collect();
        if let Some(error) = &envelope.error {
            failures.push(error.kind);
        }
        let result_count = envelope.candidates().len();
        let kind = classification.request.kind();

        lock(&self.metrics).pipeline.record_request(
            kind,
            envelope.diagnostics.cache_hit,
            envelope.success,
            result_count,
        );
        lock(&self.query_log).record(QueryLogEntry::new(
            query,
            kind,
            classification.tier,
            classification.state,
            envelope.diagnostics.cache_hit,
            started.elapsed(),
            result_count,
            envelope.success,
            failures,
        ));
    }

    /// Run `f` against the query log.
    pub fn with_query_log<R>(&self, f: impl FnOnce(&QueryLog) -> R) -> R {
        f(&*lock(&self.query_log))
    }

    /// Current metrics.
    pub fn metrics(&self) -> MetricsCollector {
        lock(&self.metrics).clone()
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

fn diagnostics(classification: &ClassificationResult, cache_hit: bool, started: Instant) -> Diagnostics {
    Diagnostics {
        tier: classification.tier,
        confidence: classification.confidence,
        state: classification.state,
        cache_hit,
        latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    }
}
