//! # LLM Provider Implementations
//!
//! Backends the crew layer talks to:
//! - OpenAI (GPT-4o, GPT-4, GPT-3.5)
//! - Mock backend for deterministic tests and offline runs
//!
//! Agents name their model as `provider:model`; [`create_backend`] turns
//! that identifier into a backend.

pub mod backend;
pub mod mock;
pub mod model;
pub mod openai;

pub use backend::*;
pub use mock::{MockBackend, MockResponse, RecordedCall};
pub use model::{create_backend, ModelSpec, DEFAULT_PROVIDER};
pub use openai::OpenAIProvider;
