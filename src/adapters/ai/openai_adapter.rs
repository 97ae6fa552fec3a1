//! OpenAI-compatible adapter for reply generation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama / llama.cpp / vLLM servers.
//! Implements `TextGenerator`; decoded output has model control tokens stripped.

use crate::domain::{DomainError, GenerationRequest};
use crate::ports::TextGenerator;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Control tokens some models leak into completions.
const SPECIAL_TOKENS: &[&str] = &[
    "<s>",
    "</s>",
    "<pad>",
    "<unk>",
    "<mask>",
    "<|endoftext|>",
    "<|im_start|>",
    "<|im_end|>",
    "<|eot_id|>",
];

/// OpenAI-compatible generation adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_url: reqwest::Url,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    /// Initialize the adapter. Fails when the endpoint is unusable, which callers
    /// treat as an unavailable backend for the rest of the session.
    ///
    /// # Arguments
    /// * `api_url` - Chat completions endpoint (e.g., "http://localhost:11434/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local servers)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `timeout` - Per-request timeout
    pub fn connect(
        api_url: &str,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let url = reqwest::Url::parse(api_url)
            .map_err(|e| DomainError::Unavailable(format!("invalid API URL '{}': {}", api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::Unavailable(format!(
                "unsupported API URL scheme '{}'",
                url.scheme()
            )));
        }
        if model.trim().is_empty() {
            return Err(DomainError::Unavailable("model name is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Unavailable(format!("HTTP client init failed: {}", e)))?;

        info!(url = %url, model = %model, "generation backend ready");

        Ok(Self::with_client(client, url, api_key, model))
    }

    fn with_client(client: reqwest::Client, api_url: reqwest::Url, api_key: String, model: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
            model,
        }
    }

    fn system_prompt() -> &'static str {
        "You are a friendly, empathetic conversational companion in a healthcare help desk. \
         Reply briefly and naturally. Do not diagnose conditions or prescribe treatment."
    }

    fn build_request(&self, request: &GenerationRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_output_tokens,
            n: request.candidates,
            temperature: 0.7,
        }
    }

    /// Strip control tokens and surrounding whitespace from raw model output.
    fn decode_reply(raw_text: &str) -> String {
        let mut text = raw_text.to_string();
        for token in SPECIAL_TOKENS {
            if text.contains(token) {
                text = text.replace(token, "");
            }
        }
        text.trim().to_string()
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    n: u8,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl TextGenerator for OpenAiGenerator {
    fn is_available(&self) -> bool {
        true
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        debug!(
            prompt_len = request.prompt.len(),
            max_tokens = request.max_output_tokens,
            "sending prompt to generation backend"
        );

        let mut http = self
            .client
            .post(self.api_url.clone())
            .header("Content-Type", "application/json")
            .json(&self.build_request(request));
        if !self.api_key.is_empty() {
            http = http.header("Authorization", format!("Bearer {}", self.api_key));
        }

        let response = http
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "generation API returned error");
            return Err(DomainError::Generation(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("Failed to parse API response: {}", e)))?;

        let raw_content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::Generation("No response choices returned".to_string()))?;

        let reply = Self::decode_reply(&raw_content);
        if reply.is_empty() {
            return Err(DomainError::Generation(
                "completion was empty after decoding".to_string(),
            ));
        }

        debug!(reply_len = reply.len(), "received generated reply");
        Ok(reply)
    }
}
