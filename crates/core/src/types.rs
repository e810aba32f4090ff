//! Core type definitions for agents, tasks and crew inputs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Unique identifier for an agent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Agent configuration
///
/// An agent is described by who it is (role, backstory), what it wants (goal)
/// and which model it talks to. None of the strings are validated; empty
/// values are passed through to the backend as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Unique agent identifier
    pub id: AgentId,
    /// Role the agent plays in the crew, e.g. "Recruiter"
    pub role: String,
    /// Personal goal of the agent
    pub goal: String,
    /// Background used to ground the agent's answers
    pub backstory: String,
    /// Model identifier, `provider:model`
    pub model: String,
    /// Credential handed to the model provider
    #[serde(skip_serializing, default)]
    pub api_key: String,
    /// Verbose logging of the agent's work
    pub verbose: bool,
    /// Temperature for LLM sampling
    pub temperature: f32,
}

impl AgentConfig {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            id: AgentId::generate(),
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
            model: String::new(),
            api_key: String::new(),
            verbose: false,
            temperature: 0.7,
        }
    }

    pub fn with_id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }

    /// System prompt derived from role, goal and backstory
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.role, self.backstory, self.goal
        )
    }
}

/// Task definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task ID
    pub id: String,
    /// Task description, may contain `{name}` placeholders
    pub description: String,
    /// Expected output description
    pub expected_output: String,
    /// Agent assigned to this task
    pub agent_id: Option<AgentId>,
    /// Extra facts rendered into the prompt's context block, in key order
    pub context: BTreeMap<String, serde_json::Value>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            expected_output: String::new(),
            agent_id: None,
            context: BTreeMap::new(),
        }
    }

    pub fn with_expected_output(mut self, output: impl Into<String>) -> Self {
        self.expected_output = output.into();
        self
    }

    pub fn with_agent(mut self, agent_id: AgentId) -> Self {
        self.agent_id = Some(agent_id);
        self
    }

    pub fn add_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    /// Description with every `{key}` replaced by the matching input.
    /// Unknown placeholders are left untouched.
    pub fn interpolated_description(&self, inputs: &CrewInputs) -> String {
        inputs.interpolate(&self.description)
    }
}

/// Named inputs handed to a crew at kickoff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrewInputs(BTreeMap<String, String>);

impl CrewInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fill `{key}` spans of `template` in a single left-to-right pass.
    ///
    /// Substituted values are copied verbatim and never scanned again, so a
    /// value containing `{other}` stays literal. Unknown keys and unclosed
    /// braces are kept as written.
    pub fn interpolate(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find(['{', '}']) {
                Some(close) if after[close..].starts_with('}') => {
                    let key = &after[..close];
                    match self.0.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                _ => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl<K, V> FromIterator<(K, V)> for CrewInputs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Output of a single executed task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOutput {
    /// Task ID
    pub task_id: String,
    /// Agent that produced the output
    pub agent_id: AgentId,
    /// Raw text produced by the agent
    pub raw: String,
    /// Execution metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

impl TaskOutput {
    pub fn new(task_id: impl Into<String>, agent_id: AgentId, raw: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            agent_id,
            raw: raw.into(),
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}
