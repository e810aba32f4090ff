//! # Crew Orchestration
//!
//! Agents and tasks grouped into a crew and run against a pluggable
//! [`CrewExecutor`].
//!
//! ## Features
//!
//! - **Crew**: agents, tasks bound to agents, sequential or parallel process
//! - **CrewExecutor**: the seam between orchestration and whatever answers a task
//! - **LlmExecutor**: prompts an LLM backend resolved from the agent's model identifier

pub mod crew;
pub mod executor;
pub mod process;

pub use crew::*;
pub use executor::*;
pub use process::*;
