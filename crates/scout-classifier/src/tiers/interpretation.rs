//! Tier 3: delegate to an injected external interpreter under a deadline,
//! then validate what comes back.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::ClassificationError;
use scout_core::models::{RequestVariant, Tier};
use scout_core::traits::{IInterpreter, InterpretationRequest};
use tracing::debug;

use super::ClassificationTier;
use crate::payload::{parse_payload, request_schema};
use crate::query::ParsedQuery;

pub struct InterpretationTier {
    interpreter: Arc<dyn IInterpreter>,
    timeout: Duration,
    interpret_without_cue: bool,
    schema: serde_json::Value,
}

impl InterpretationTier {
    pub fn new(interpreter: Arc<dyn IInterpreter>, timeout: Duration, interpret_without_cue: bool) -> Self {
        Self {
            interpreter,
            timeout,
            interpret_without_cue,
            schema: request_schema(),
        }
    }

    /// Whether this query should be sent to the interpreter at all.
    pub fn should_attempt(&self, query: &ParsedQuery) -> bool {
        !query.is_empty()
            && self.interpreter.is_available()
            && (query.relational || self.interpret_without_cue)
    }
}

#[async_trait]
impl ClassificationTier for InterpretationTier {
    fn tier(&self) -> Tier {
        Tier::ExternalInterpretation
    }

    async fn attempt(
        &self,
        query: &ParsedQuery,
        _snapshot: &CorpusSnapshot,
    ) -> Result<Option<RequestVariant>, ClassificationError> {
        if !self.should_attempt(query) {
            debug!(
                interpreter = self.interpreter.name(),
                available = self.interpreter.is_available(),
                relational = query.relational,
                "skipping external interpretation"
            );
            return Ok(None);
        }

        let request = InterpretationRequest {
            query: query.raw.clone(),
            schema: self.schema.clone(),
        };
        let value = tokio::time::timeout(self.timeout, self.interpreter.interpret(&request))
            .await
            .map_err(|_| ClassificationError::Timeout {
                interpreter: self.interpreter.name().to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            })??;

        parse_payload(value).map(Some)
    }
}
