use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP interpreter settings (OpenAI-compatible chat completions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the bearer token.
    pub api_key_env: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: defaults::DEFAULT_INTERPRETER_ENDPOINT.to_string(),
            model: defaults::DEFAULT_INTERPRETER_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_INTERPRETER_API_KEY_ENV.to_string(),
            temperature: 0.1,
            max_tokens: 500,
        }
    }
}
