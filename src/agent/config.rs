use crate::error::{Result, TodoAgentError};
use crate::todo::{Clock, SystemClock};
use chrono::NaiveDate;

pub const DEFAULT_AGENT_NAME: &str = "todo";
pub const DEFAULT_MODEL: &str = "openai:gpt-4o-mini";

/// Builds the system instructions, telling the model what day it is
pub fn default_instructions(today: NaiveDate) -> String {
    format!(
        "You're a helpful todo agent

format for displaying todos:

- \"<NAME>\" due to <DUE_DATE> (tag1, tag2...)

show all the todos returned by the API

Rules:

- if due date or tags are not present, don't display them
- when you create a todo, reply with confirmation
- today is {}",
        today.format("%Y-%m-%d")
    )
}

/// Identity, model and behaviour of the todo agent
#[derive(Debug, Clone, PartialEq)]
pub struct TodoAgentConfig {
    pub name: String,
    /// `openai:<model>` or a bare model name
    pub model: String,
    pub instructions: String,
}

impl TodoAgentConfig {
    /// Default configuration with instructions dated by `clock`
    pub fn dated(clock: &dyn Clock) -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            model: DEFAULT_MODEL.to_string(),
            instructions: default_instructions(clock.now().date()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Model name to send to the gateway, with the provider prefix removed
    pub fn model_name(&self) -> Result<String> {
        parse_model(&self.model)
    }
}

impl Default for TodoAgentConfig {
    fn default() -> Self {
        Self::dated(&SystemClock)
    }
}

/// Provider prefixes that name a non-OpenAI API
const UNSUPPORTED_PROVIDERS: &[&str] = &[
    "anthropic",
    "bedrock",
    "cohere",
    "deepseek",
    "gemini",
    "google-gla",
    "google-vertex",
    "groq",
    "mistral",
    "ollama",
];

/// Strips the `openai:` provider prefix
///
/// Other colons belong to the model name (`llama3.1:8b` on a local OpenAI-compatible server).
/// Prefixes of other known providers are rejected.
pub fn parse_model(model: &str) -> Result<String> {
    let model = model.trim();
    let name = match model.strip_prefix("openai:") {
        Some(name) => name,
        None => {
            if let Some((provider, _)) = model.split_once(':') {
                if UNSUPPORTED_PROVIDERS.contains(&provider) {
                    return Err(TodoAgentError::ConfigError(format!(
                        "Unsupported model provider '{}' in '{}'; point OPENAI_API_ENDPOINT at an OpenAI-compatible server instead",
                        provider, model
                    )));
                }
            }
            model
        }
    };

    if name.is_empty() {
        return Err(TodoAgentError::ConfigError("Model name is empty".to_string()));
    }
    Ok(name.to_string())
}
