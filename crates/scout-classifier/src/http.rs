//! OpenAI-compatible chat-completions interpreter.

use std::time::Duration;

use async_trait::async_trait;
use scout_core::config::InterpreterConfig;
use scout_core::errors::ClassificationError;
use scout_core::traits::{IInterpreter, InterpretationRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

const SYSTEM_PROMPT: &str = "You translate football scouting questions into a single JSON object. \
Reply with JSON only, no prose. The object must match one of the request shapes in this schema:";

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

pub struct HttpInterpreter {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    temperature: f64,
    max_tokens: u32,
}

impl HttpInterpreter {
    /// Build from config. The bearer token is read from the configured
    /// environment variable; without one the interpreter reports itself
    /// unavailable.
    pub fn from_config(config: &InterpreterConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::new(config, api_key)
    }

    pub fn new(config: &InterpreterConfig, api_key: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn failure(&self, reason: impl Into<String>) -> ClassificationError {
        ClassificationError::ExternalService {
            interpreter: self.name().to_string(),
            reason: reason.into(),
        }
    }
}

/// Remove a surrounding markdown code fence, if any.
pub(crate) fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[async_trait]
impl IInterpreter for HttpInterpreter {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
    ) -> Result<serde_json::Value, ClassificationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ClassificationError::Unavailable {
                interpreter: self.name().to_string(),
            })?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: format!("{SYSTEM_PROMPT}\n{}", request.schema),
                },
                ChatMessage {
                    role: "user",
                    content: request.query.clone(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(endpoint = %self.endpoint, model = %self.model, "sending interpretation request");
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.failure(format!("HTTP error: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(self.failure(format!("API returned {status}: {text}")));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.failure(format!("JSON parse error: {e}")))?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| self.failure("empty completion"))?;

        serde_json::from_str(strip_code_fence(&content)).map_err(|e| {
            ClassificationError::Validation {
                reason: format!("interpreter reply is not JSON: {e}"),
            }
        })
    }

    fn name(&self) -> &str {
        "http-chat"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
