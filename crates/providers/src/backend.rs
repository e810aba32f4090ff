//! Backend trait for LLM providers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use talent_scout_core::{errors::LLMError, LLMMessage};

/// LLM inference output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceOutput {
    /// Generated content
    pub content: String,

    /// Token usage
    pub token_usage: TokenUsage,

    /// Response metadata
    pub metadata: std::collections::HashMap<String, serde_json::Value>,
}

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Input tokens
    pub prompt_tokens: usize,

    /// Output tokens
    pub completion_tokens: usize,

    /// Total tokens
    pub total_tokens: usize,
}

impl TokenUsage {
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// LLM backend trait
#[async_trait]
pub trait LLMBackend: Send + Sync {
    /// Perform inference with the LLM
    async fn infer(
        &self,
        messages: &[LLMMessage],
        temperature: f32,
    ) -> Result<InferenceOutput, LLMError>;

    /// Get model information
    fn model_info(&self) -> ModelInfo;
}

/// Model information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier
    pub model: String,

    /// Provider name
    pub provider: String,

    /// Maximum context window size
    pub max_tokens: usize,

    /// Input cost per 1M tokens
    pub input_cost_per_1m: f64,

    /// Output cost per 1M tokens
    pub output_cost_per_1m: f64,
}

impl ModelInfo {
    pub fn calculate_cost(&self, usage: &TokenUsage) -> f64 {
        let input_cost = (usage.prompt_tokens as f64 / 1_000_000.0) * self.input_cost_per_1m;
        let output_cost = (usage.completion_tokens as f64 / 1_000_000.0) * self.output_cost_per_1m;
        input_cost + output_cost
    }
}
