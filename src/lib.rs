//! # Talent Scout
//!
//! A recruiting assistant built on a small multi-agent crew layer.
//!
//! ```rust,ignore
//! use talent_scout::run_recruitment_agent;
//!
//! let result = run_recruitment_agent("Senior full-stack engineer, 5+ years").await;
//! for candidate in &result.candidates {
//!     println!("{} - {}", candidate.name, candidate.current_role);
//! }
//! println!("{}", result.summary);
//! ```
//!
//! The building blocks are re-exported: [`types`] for agent and task types,
//! [`providers`] for LLM backends and [`crew`] for orchestration.

pub mod config;
pub mod recruitment;

pub use talent_scout_core as types;
pub use talent_scout_crew as crew;
pub use talent_scout_providers as providers;

pub use config::RecruiterSettings;
pub use recruitment::{
    get_recruitment_agent, placeholder_candidates, run_recruitment_agent,
    run_recruitment_agent_with_model, Candidate, Recruiter, RecruitmentResult, DEFAULT_MODEL,
};
