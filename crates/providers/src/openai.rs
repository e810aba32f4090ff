//! OpenAI provider (GPT-4o, GPT-4, GPT-3.5, etc.)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::backend::{InferenceOutput, LLMBackend, ModelInfo, TokenUsage};
use talent_scout_core::{errors::LLMError, LLMMessage};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at an OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn convert_messages(&self, messages: &[LLMMessage]) -> Vec<serde_json::Value> {
        messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl LLMBackend for OpenAIProvider {
    async fn infer(
        &self,
        messages: &[LLMMessage],
        temperature: f32,
    ) -> Result<InferenceOutput, LLMError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": self.convert_messages(messages),
            "temperature": temperature,
        });

        debug!(
            "OpenAI request: model={}, messages={}",
            self.model,
            messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                429 => LLMError::RateLimitExceeded,
                401 => LLMError::AuthenticationFailed(error_text),
                _ => LLMError::ApiError(format!("Status {}: {}", status, error_text)),
            });
        }

        let api_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| LLMError::InvalidResponse(e.to_string()))?;

        let choice = api_response
            .choices
            .first()
            .ok_or_else(|| LLMError::InvalidResponse("No choices in response".to_string()))?;

        let token_usage = api_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(InferenceOutput {
            content: choice.message.content.clone().unwrap_or_default(),
            token_usage,
            metadata: std::collections::HashMap::new(),
        })
    }

    fn model_info(&self) -> ModelInfo {
        let (max_tokens, input_cost_per_1m, output_cost_per_1m) = match self.model.as_str() {
            "gpt-4o" => (128_000, 2.50, 10.0),
            "gpt-4o-mini" => (128_000, 0.15, 0.60),
            "gpt-4-turbo-preview" | "gpt-4-turbo" => (128_000, 10.0, 30.0),
            "gpt-4" => (8_192, 30.0, 60.0),
            "gpt-3.5-turbo" => (16_385, 0.50, 1.50),
            _ => (4_096, 1.0, 2.0),
        };

        ModelInfo {
            model: self.model.clone(),
            provider: "openai".to_string(),
            max_tokens,
            input_cost_per_1m,
            output_cost_per_1m,
        }
    }
}

// OpenAI API types

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}
