//! Crew management

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use talent_scout_core::*;

use crate::executor::CrewExecutor;
use crate::process::Process;

/// Crew configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewConfig {
    /// Crew name
    pub name: String,

    /// Crew description
    pub description: String,

    /// Execution process type
    pub process: Process,

    /// Verbose logging
    pub verbose: bool,
}

impl CrewConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            process: Process::Sequential,
            verbose: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_process(mut self, process: Process) -> Self {
        self.process = process;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Result of a crew kickoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewOutput {
    /// Per-task outputs, in task insertion order
    pub tasks_output: Vec<TaskOutput>,
}

impl CrewOutput {
    /// Output of the last task, which is the crew's answer
    pub fn raw(&self) -> &str {
        self.tasks_output
            .last()
            .map(|output| output.raw.as_str())
            .unwrap_or("")
    }
}

/// Crew of agents working together
pub struct Crew {
    config: CrewConfig,
    executor: Arc<dyn CrewExecutor>,
    agents: Vec<AgentConfig>,
    tasks: Vec<Task>,
}

impl Crew {
    /// Create a new crew
    pub fn new(config: CrewConfig, executor: Arc<dyn CrewExecutor>) -> Self {
        Self {
            config,
            executor,
            agents: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Add an agent to the crew
    pub fn add_agent(&mut self, agent_config: AgentConfig) {
        self.agents.push(agent_config);
    }

    /// Add a task to the crew
    ///
    /// A task bound to an agent must name one that is already in the crew.
    pub fn add_task(&mut self, task: Task) -> Result<(), CrewError> {
        if let Some(agent_id) = &task.agent_id {
            if self.find_agent(agent_id).is_none() {
                return Err(CrewError::UnknownAgent(agent_id.clone()));
            }
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn config(&self) -> &CrewConfig {
        &self.config
    }

    pub fn agents(&self) -> &[AgentConfig] {
        &self.agents
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Swap the executor, keeping agents and tasks
    pub fn with_executor(mut self, executor: Arc<dyn CrewExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Execute all tasks with the given inputs
    pub async fn kickoff(&self, inputs: CrewInputs) -> Result<CrewOutput, CrewError> {
        tracing::info!(
            crew = %self.config.name,
            process = %self.config.process,
            "Crew starting execution with {} tasks",
            self.tasks.len()
        );

        let tasks_output = match self.config.process {
            Process::Sequential => self.execute_sequential(&inputs).await?,
            Process::Parallel => self.execute_parallel(&inputs).await?,
        };

        tracing::info!(crew = %self.config.name, "Crew finished");
        Ok(CrewOutput { tasks_output })
    }

    async fn execute_sequential(&self, inputs: &CrewInputs) -> Result<Vec<TaskOutput>, CrewError> {
        let mut results = Vec::with_capacity(self.tasks.len());

        for task in &self.tasks {
            results.push(self.execute_single_task(task, inputs).await?);
        }

        Ok(results)
    }

    async fn execute_parallel(&self, inputs: &CrewInputs) -> Result<Vec<TaskOutput>, CrewError> {
        let futures = self
            .tasks
            .iter()
            .map(|task| self.execute_single_task(task, inputs));

        join_all(futures).await.into_iter().collect()
    }

    async fn execute_single_task(
        &self,
        task: &Task,
        inputs: &CrewInputs,
    ) -> Result<TaskOutput, CrewError> {
        let agent = match &task.agent_id {
            Some(agent_id) => self
                .find_agent(agent_id)
                .ok_or_else(|| CrewError::UnknownAgent(agent_id.clone()))?,
            None => self
                .agents
                .first()
                .ok_or_else(|| CrewError::NoAgentAvailable(task.description.clone()))?,
        };

        if self.config.verbose || agent.verbose {
            tracing::info!(agent = %agent.role, "Executing task: {}", task.description);
        } else {
            tracing::debug!(agent = %agent.role, "Executing task: {}", task.description);
        }

        self.executor.execute(agent, task, inputs).await
    }

    fn find_agent(&self, agent_id: &AgentId) -> Option<&AgentConfig> {
        self.agents.iter().find(|agent| &agent.id == agent_id)
    }

    /// Get crew statistics
    pub fn stats(&self) -> CrewStats {
        CrewStats {
            name: self.config.name.clone(),
            agent_count: self.agents.len(),
            task_count: self.tasks.len(),
        }
    }
}

/// Crew statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewStats {
    pub name: String,
    pub agent_count: usize,
    pub task_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Answers with the agent's role and the interpolated description
    struct EchoExecutor;

    #[async_trait]
    impl CrewExecutor for EchoExecutor {
        async fn execute(
            &self,
            agent: &AgentConfig,
            task: &Task,
            inputs: &CrewInputs,
        ) -> Result<TaskOutput, CrewError> {
            Ok(TaskOutput::new(
                task.id.clone(),
                agent.id.clone(),
                format!("{}: {}", agent.role, task.interpolated_description(inputs)),
            ))
        }
    }

    fn agent(role: &str) -> AgentConfig {
        AgentConfig::new(role, "goal", "backstory")
    }

    #[tokio::test]
    async fn test_sequential_kickoff_keeps_order() {
        let mut crew = Crew::new(CrewConfig::new("test"), Arc::new(EchoExecutor));
        let a = agent("Sourcer");
        let b = agent("Screener");
        let (a_id, b_id) = (a.id.clone(), b.id.clone());
        crew.add_agent(a);
        crew.add_agent(b);
        crew.add_task(Task::new("source {role}").with_agent(a_id)).unwrap();
        crew.add_task(Task::new("screen {role}").with_agent(b_id)).unwrap();

        let output = crew
            .kickoff(CrewInputs::new().with("role", "engineers"))
            .await
            .unwrap();

        assert_eq!(output.tasks_output.len(), 2);
        assert_eq!(output.tasks_output[0].raw, "Sourcer: source engineers");
        assert_eq!(output.raw(), "Screener: screen engineers");
    }

    #[tokio::test]
    async fn test_parallel_kickoff_keeps_order() {
        let config = CrewConfig::new("test").with_process(Process::Parallel);
        let mut crew = Crew::new(config, Arc::new(EchoExecutor));
        crew.add_agent(agent("Recruiter"));
        for i in 0..3 {
            crew.add_task(Task::new(format!("task {}", i))).unwrap();
        }

        let output = crew.kickoff(CrewInputs::new()).await.unwrap();
        let raws: Vec<&str> = output.tasks_output.iter().map(|o| o.raw.as_str()).collect();
        assert_eq!(raws, vec!["Recruiter: task 0", "Recruiter: task 1", "Recruiter: task 2"]);
    }

    #[test]
    fn test_add_task_rejects_foreign_agent() {
        let mut crew = Crew::new(CrewConfig::new("test"), Arc::new(EchoExecutor));
        crew.add_agent(agent("Recruiter"));

        let stranger = AgentId::new("stranger");
        let result = crew.add_task(Task::new("List").with_agent(stranger.clone()));

        assert!(matches!(result, Err(CrewError::UnknownAgent(id)) if id == stranger));
        assert_eq!(crew.stats().task_count, 0);
    }

    #[tokio::test]
    async fn test_kickoff_without_agents_fails() {
        let mut crew = Crew::new(CrewConfig::new("empty"), Arc::new(EchoExecutor));
        crew.add_task(Task::new("List candidates")).unwrap();

        let result = crew.kickoff(CrewInputs::new()).await;
        assert!(matches!(result, Err(CrewError::NoAgentAvailable(_))));
    }

    #[tokio::test]
    async fn test_kickoff_without_tasks_is_empty() {
        let mut crew = Crew::new(CrewConfig::new("idle"), Arc::new(EchoExecutor));
        crew.add_agent(agent("Recruiter"));

        let output = crew.kickoff(CrewInputs::new()).await.unwrap();
        assert!(output.tasks_output.is_empty());
        assert_eq!(output.raw(), "");
    }

    #[test]
    fn test_stats() {
        let mut crew = Crew::new(
            CrewConfig::new("Recruiting").with_description("Finds people"),
            Arc::new(EchoExecutor),
        );
        crew.add_agent(agent("Recruiter"));
        crew.add_task(Task::new("List")).unwrap();

        let stats = crew.stats();
        assert_eq!(stats.name, "Recruiting");
        assert_eq!(stats.agent_count, 1);
        assert_eq!(stats.task_count, 1);
        assert_eq!(crew.config().description, "Finds people");
    }
}
