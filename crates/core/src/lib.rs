//! # Talent Scout Core
//!
//! Core types shared by the talent-scout crates: agent and task
//! configuration, crew inputs and outputs, LLM conversation messages and
//! the error taxonomy.

pub mod errors;
pub mod message;
pub mod types;


pub use errors::*;
pub use message::*;
pub use types::*;
