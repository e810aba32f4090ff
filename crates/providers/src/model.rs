//! Model identifiers and backend resolution
//!
//! Agents name their model as `provider:model`, e.g. `openai:gpt-4o`. A bare
//! model name without a provider prefix is treated as an OpenAI model.

use std::sync::Arc;

use talent_scout_core::errors::LLMError;
use tracing::debug;

use crate::backend::LLMBackend;
use crate::mock::MockBackend;
use crate::openai::OpenAIProvider;

/// Provider used when a model identifier has no `provider:` prefix
pub const DEFAULT_PROVIDER: &str = "openai";

/// Parsed `provider:model` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    pub provider: String,
    pub model: String,
}

impl ModelSpec {
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier.trim();
        match identifier.split_once(':') {
            Some((provider, model)) => Self {
                provider: provider.trim().to_lowercase(),
                model: model.trim().to_string(),
            },
            None => Self {
                provider: DEFAULT_PROVIDER.to_string(),
                model: identifier.to_string(),
            },
        }
    }
}

impl std::fmt::Display for ModelSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.provider, self.model)
    }
}

/// Build the backend for a model spec.
///
/// The API key is passed through unchecked; an empty key surfaces later as
/// an authentication failure from the provider.
pub fn create_backend(spec: &ModelSpec, api_key: &str) -> Result<Arc<dyn LLMBackend>, LLMError> {
    debug!(provider = %spec.provider, model = %spec.model, "Resolving LLM backend");

    match spec.provider.as_str() {
        "openai" if !spec.model.is_empty() => Ok(Arc::new(OpenAIProvider::new(
            api_key.to_string(),
            spec.model.clone(),
        ))),
        "mock" => Ok(Arc::new(MockBackend::echo())),
        _ => Err(LLMError::ModelNotAvailable(spec.to_string())),
    }
}
