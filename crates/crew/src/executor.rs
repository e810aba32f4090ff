//! Task execution seam
//!
//! A [`Crew`](crate::Crew) never talks to a model directly. Each task is
//! handed to a [`CrewExecutor`] together with its agent and the kickoff
//! inputs. [`LlmExecutor`] is the production implementation; tests swap in
//! their own executors.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use talent_scout_core::{AgentConfig, CrewError, CrewInputs, LLMMessage, Task, TaskOutput};
use talent_scout_providers::{create_backend, LLMBackend, ModelSpec};

/// Runs a single task on behalf of an agent
#[async_trait]
pub trait CrewExecutor: Send + Sync {
    async fn execute(
        &self,
        agent: &AgentConfig,
        task: &Task,
        inputs: &CrewInputs,
    ) -> Result<TaskOutput, CrewError>;
}

/// Executor that prompts an LLM once per task
///
/// Without an injected backend, the backend is resolved per task from the
/// agent's model identifier and API key.
#[derive(Default, Clone)]
pub struct LlmExecutor {
    backend: Option<Arc<dyn LLMBackend>>,
}

impl LlmExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this backend for every agent, ignoring their model identifiers
    pub fn with_backend(backend: Arc<dyn LLMBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    fn backend_for(&self, agent: &AgentConfig) -> Result<Arc<dyn LLMBackend>, CrewError> {
        match &self.backend {
            Some(backend) => Ok(backend.clone()),
            None => Ok(create_backend(&ModelSpec::parse(&agent.model), &agent.api_key)?),
        }
    }

    /// Conversation sent to the model for one task
    pub fn build_messages(agent: &AgentConfig, task: &Task, inputs: &CrewInputs) -> Vec<LLMMessage> {
        let mut user = task.interpolated_description(inputs);

        let mut context: Vec<String> = inputs
            .iter()
            .filter(|(key, _)| !task.description.contains(&format!("{{{}}}", key)))
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect();
        context.extend(task.context.iter().map(|(key, value)| match value {
            serde_json::Value::String(text) => format!("{}: {}", key, text),
            other => format!("{}: {}", key, other),
        }));
        if !context.is_empty() {
            user.push_str("\n\nContext:\n");
            user.push_str(&context.join("\n"));
        }

        if !task.expected_output.is_empty() {
            user.push_str("\n\nThis is the expected criteria for your final answer: ");
            user.push_str(&task.expected_output);
        }

        vec![LLMMessage::system(agent.system_prompt()), LLMMessage::user(user)]
    }
}

#[async_trait]
impl CrewExecutor for LlmExecutor {
    async fn execute(
        &self,
        agent: &AgentConfig,
        task: &Task,
        inputs: &CrewInputs,
    ) -> Result<TaskOutput, CrewError> {
        let backend = self.backend_for(agent)?;
        let messages = Self::build_messages(agent, task, inputs);
        let start = Instant::now();

        let output = backend.infer(&messages, agent.temperature).await?;

        if agent.verbose {
            debug!(agent = %agent.role, task = %task.id, "Agent answered: {}", output.content);
        }

        Ok(TaskOutput::new(task.id.clone(), agent.id.clone(), output.content)
            .with_metadata("model", serde_json::json!(backend.model_info().model))
            .with_metadata(
                "total_tokens",
                serde_json::json!(output.token_usage.total_tokens),
            )
            .with_metadata("elapsed_ms", serde_json::json!(start.elapsed().as_millis() as u64)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talent_scout_core::LLMError;
    use talent_scout_providers::{MockBackend, MockResponse};

    fn recruiter() -> AgentConfig {
        AgentConfig::new("Recruiter", "Find great engineers", "Veteran tech recruiter.")
            .with_model("openai:gpt-4o")
    }

    #[test]
    fn test_build_messages_appends_unused_inputs() {
        let task = Task::new("List the top 3 candidates.")
            .with_expected_output("Three names with summaries.");
        let inputs = CrewInputs::new().with("job_requirements", "Rails + React");

        let messages = LlmExecutor::build_messages(&recruiter(), &task, &inputs);

        assert_eq!(messages.len(), 2);
        assert!(messages[0].content.contains("Veteran tech recruiter."));
        assert!(messages[1].content.starts_with("List the top 3 candidates."));
        assert!(messages[1].content.contains("job_requirements: Rails + React"));
        assert!(messages[1]
            .content
            .ends_with("expected criteria for your final answer: Three names with summaries."));
    }

    #[test]
    fn test_build_messages_interpolated_inputs_not_repeated() {
        let task = Task::new("Find: {job_requirements}");
        let inputs = CrewInputs::new().with("job_requirements", "Rails");

        let messages = LlmExecutor::build_messages(&recruiter(), &task, &inputs);
        assert_eq!(messages[1].content, "Find: Rails");
    }

    #[test]
    fn test_build_messages_renders_task_context() {
        let task = Task::new("Rank the shortlist.")
            .add_context("seniority", serde_json::json!("senior"))
            .add_context("max_candidates", serde_json::json!(3));
        let inputs = CrewInputs::new().with("job_requirements", "Rails");

        let messages = LlmExecutor::build_messages(&recruiter(), &task, &inputs);

        assert_eq!(
            messages[1].content,
            "Rank the shortlist.\n\nContext:\njob_requirements: Rails\nmax_candidates: 3\nseniority: senior"
        );
    }

    #[tokio::test]
    async fn test_execute_with_injected_backend() {
        let backend = Arc::new(MockBackend::new().with_response(MockResponse::text("Sarah Chen")));
        let executor = LlmExecutor::with_backend(backend.clone());
        let agent = recruiter();
        let task = Task::new("List candidates").with_agent(agent.id.clone());

        let output = executor
            .execute(&agent, &task, &CrewInputs::new())
            .await
            .unwrap();

        assert_eq!(output.raw, "Sarah Chen");
        assert_eq!(output.task_id, task.id);
        assert_eq!(output.agent_id, agent.id);
        assert_eq!(output.metadata["model"], "mock-model");
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_execute_propagates_backend_error() {
        let backend = Arc::new(MockBackend::new().with_response(MockResponse::error("boom")));
        let executor = LlmExecutor::with_backend(backend);

        let result = executor
            .execute(&recruiter(), &Task::new("List"), &CrewInputs::new())
            .await;

        match result {
            Err(CrewError::LLM(LLMError::ApiError(msg))) => assert_eq!(msg, "boom"),
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_resolves_backend_from_model() {
        let agent = recruiter().with_model("mock:echo");
        let task = Task::new("Find: {job_requirements}");
        let inputs = CrewInputs::new().with("job_requirements", "Rails");

        let output = LlmExecutor::new().execute(&agent, &task, &inputs).await.unwrap();
        assert_eq!(output.raw, "Find: Rails");
    }

    #[tokio::test]
    async fn test_execute_unknown_provider() {
        let agent = recruiter().with_model("acme:brain");

        let result = LlmExecutor::new()
            .execute(&agent, &Task::new("List"), &CrewInputs::new())
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Model not available: acme:brain");
    }
}
