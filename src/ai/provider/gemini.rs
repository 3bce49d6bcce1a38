//! Gemini API client
//!
//! Calls the non-streaming `generateContent` endpoint with a JSON response
//! schema and returns the text of the first candidate.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AiError;

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self::with_client(Client::new(), api_key, model, base_url)
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(client: Client, api_key: String, model: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            model,
            base_url,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint for this client's model
    pub fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Serialize the request body for a prompt and response schema
    pub fn build_request_body(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }]
                }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        serde_json::to_string(&body).map_err(|e| AiError::Parse(e.to_string()))
    }

    /// Send the prompt and wait for the complete reply
    pub async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AiError> {
        let body = self.build_request_body(prompt, schema)?;

        log::debug!(
            "Sending generateContent request ({} bytes) to model {}",
            body.len(),
            self.model
        );

        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(AiError::Api {
                code: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        extract_text(&text)
    }
}

/// Pull `error.message` out of an error body, falling back to the raw body
pub(crate) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

/// Concatenate the text parts of the first candidate
pub(crate) fn extract_text(body: &str) -> Result<String, AiError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(AiError::Parse(format!("Prompt was not answered: {reason}")));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unknown".to_string());
        return Err(AiError::Parse(format!(
            "Response contained no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
