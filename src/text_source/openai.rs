// OpenAI-compatible chat completions backend

use super::{ProviderError, TextSource};
use crate::config::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for `POST {base_url}/chat/completions`.
///
/// Must be created and dropped outside an async runtime context.
pub struct OpenAiTextSource {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key_env: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl OpenAiTextSource {
    /// Build a client from provider config, reading the API key from the
    /// configured environment variable. A missing key is not an error here;
    /// every completion then fails and the caller falls back.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            log::warn!(
                "No API key in ${}; generated content will use fallback templates",
                config.api_key_env
            );
        }

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key_env: config.api_key_env.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextSource for OpenAiTextSource {
    fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey(self.api_key_env.clone()))?;

        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            max_tokens,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        log::debug!(
            "Requesting completion from {} (model: {}, max_tokens: {})",
            self.endpoint,
            self.model,
            max_tokens
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}
