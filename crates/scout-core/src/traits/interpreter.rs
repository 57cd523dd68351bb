use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ClassificationError;

/// Input handed to an external interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    pub query: String,
    /// Machine-readable description of the accepted request payloads.
    pub schema: serde_json::Value,
}

/// External natural-language interpretation capability.
///
/// Implementations return the raw JSON payload; validation against the
/// request schema happens on the classifier side.
#[async_trait]
pub trait IInterpreter: Send + Sync {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError>;

    /// Human-readable interpreter name.
    fn name(&self) -> &str;

    /// Whether this interpreter can currently be called.
    fn is_available(&self) -> bool {
        true
    }
}
