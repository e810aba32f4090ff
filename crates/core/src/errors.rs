//! Error types for the agent framework

use thiserror::Error;

/// LLM backend errors
#[derive(Error, Debug)]
pub enum LLMError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),
}

/// Crew/orchestration errors
#[derive(Error, Debug)]
pub enum CrewError {
    #[error("No agent available for task: {0}")]
    NoAgentAvailable(String),

    #[error("Agent {0} is not a member of this crew")]
    UnknownAgent(crate::types::AgentId),

    #[error(transparent)]
    LLM(#[from] LLMError),
}
