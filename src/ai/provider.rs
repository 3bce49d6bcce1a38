//! AI provider abstraction
//!
//! Defines the AiProvider enum, AiError types, and factory for creating provider instances.

use serde_json::Value;
use thiserror::Error;

use crate::config::AiConfig;

mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur while asking the model for suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// Missing API key or model
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The worker could not start its async runtime
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// Google Gemini `generateContent` API
    Gemini(GeminiClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AiError::NotConfigured(
                    "Missing API key. Set GEMINI_API_KEY or api_key in the [ai] config section"
                        .to_string(),
                )
            })?;

        if config.model.trim().is_empty() {
            return Err(AiError::NotConfigured(
                "Empty model in [ai] config".to_string(),
            ));
        }

        Ok(AiProvider::Gemini(GeminiClient::new(
            api_key.trim().to_string(),
            config.model.trim().to_string(),
            config.base_url.clone(),
        )))
    }

    /// Send one prompt and return the raw text of the model's reply
    pub async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        match self {
            AiProvider::Gemini(client) => client.generate(prompt, schema).await,
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
