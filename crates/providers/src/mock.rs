//! Scripted LLM backend for offline runs and tests
//!
//! [`MockBackend`] answers from a script instead of a model:
//!
//! - keyword rules, checked first: the first rule whose keyword appears in
//!   any message wins
//! - echo mode: the last message is sent back unchanged (`mock:*` models)
//! - a queue of replies handed out in order, wrapping around at the end
//!
//! Every call is recorded so tests can look at the prompt a crew produced.
//!
//! ```rust,ignore
//! let backend = MockBackend::new()
//!     .when_contains("React", MockResponse::text("Sarah Chen"))
//!     .with_response(MockResponse::error("quota exhausted"));
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use talent_scout_core::{errors::LLMError, LLMMessage};

use crate::backend::{InferenceOutput, LLMBackend, ModelInfo, TokenUsage};

const FALLBACK_REPLY: &str = "Mock response";

/// One scripted reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    /// Answer with this text
    Text(String),
    /// Fail with [`LLMError::ApiError`] carrying this message
    Error(String),
}

impl MockResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// A prompt the backend received
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<LLMMessage>,
    pub temperature: f32,
}

#[derive(Default)]
struct Script {
    rules: Vec<(String, MockResponse)>,
    queue: Vec<MockResponse>,
    cursor: usize,
    calls: Vec<RecordedCall>,
}

impl Script {
    fn reply_to(&mut self, messages: &[LLMMessage], echo: bool) -> MockResponse {
        let rule = self.rules.iter().find(|(keyword, _)| {
            messages
                .iter()
                .any(|message| message.content.contains(keyword.as_str()))
        });
        if let Some((_, response)) = rule {
            return response.clone();
        }

        if echo {
            let last = messages.last().map(|m| m.content.as_str()).unwrap_or_default();
            return MockResponse::text(last);
        }

        if self.queue.is_empty() {
            return MockResponse::text(FALLBACK_REPLY);
        }
        let response = self.queue[self.cursor % self.queue.len()].clone();
        self.cursor += 1;
        response
    }
}

/// Deterministic stand-in for a real provider
#[derive(Default)]
pub struct MockBackend {
    echo: bool,
    script: Mutex<Script>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that answers with the last message it receives
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Queue a reply
    pub fn with_response(self, response: MockResponse) -> Self {
        self.script.lock().queue.push(response);
        self
    }

    /// Answer with `response` whenever any message contains `keyword`
    pub fn when_contains(self, keyword: impl Into<String>, response: MockResponse) -> Self {
        self.script.lock().rules.push((keyword.into(), response));
        self
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().calls.len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.script.lock().calls.last().cloned()
    }
}

/// Whitespace-separated words, a rough stand-in for real token counts
fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[async_trait]
impl LLMBackend for MockBackend {
    async fn infer(
        &self,
        messages: &[LLMMessage],
        temperature: f32,
    ) -> Result<InferenceOutput, LLMError> {
        let response = {
            let mut script = self.script.lock();
            script.calls.push(RecordedCall {
                messages: messages.to_vec(),
                temperature,
            });
            script.reply_to(messages, self.echo)
        };

        match response {
            MockResponse::Error(message) => Err(LLMError::ApiError(message)),
            MockResponse::Text(content) => {
                let prompt_words = messages.iter().map(|m| word_count(&m.content)).sum();
                Ok(InferenceOutput {
                    token_usage: TokenUsage::new(prompt_words, word_count(&content)),
                    content,
                    metadata: HashMap::new(),
                })
            }
        }
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model: "mock-model".to_string(),
            provider: "mock".to_string(),
            max_tokens: 128_000,
            input_cost_per_1m: 0.0,
            output_cost_per_1m: 0.0,
        }
    }
}
