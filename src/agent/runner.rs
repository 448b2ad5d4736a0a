use crate::agent::config::TodoAgentConfig;
use crate::error::Result;
use crate::llm::{CompletionConfig, LlmBroker, LlmGateway, LlmMessage, LlmTool, LlmToolCall, Usage};
use std::sync::Arc;
use tracing::debug;

/// Result of one prompt run through the agent
#[derive(Debug, Clone)]
pub struct AgentRun {
    pub output: String,
    /// The user prompt followed by every message the run produced
    pub new_messages: Vec<LlmMessage>,
    pub tool_calls: Vec<LlmToolCall>,
    pub usage: Usage,
}

/// The todo agent: instructions, a broker and the tools it may call
pub struct TodoAgent {
    config: TodoAgentConfig,
    broker: LlmBroker,
    tools: Vec<Box<dyn LlmTool>>,
    completion: Option<CompletionConfig>,
}

impl TodoAgent {
    pub fn new(
        config: TodoAgentConfig,
        gateway: Arc<dyn LlmGateway>,
        tools: Vec<Box<dyn LlmTool>>,
    ) -> Result<Self> {
        let broker = LlmBroker::new(config.model_name()?, gateway).with_name(config.name.clone());
        Ok(Self {
            config,
            broker,
            tools,
            completion: None,
        })
    }

    pub fn with_completion_config(mut self, completion: CompletionConfig) -> Self {
        self.completion = Some(completion);
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TodoAgentConfig {
        &self.config
    }

    pub fn tools(&self) -> &[Box<dyn LlmTool>] {
        &self.tools
    }

    /// Runs `prompt` on top of `history`
    ///
    /// The instructions are prepended on every run and never appear in `new_messages`.
    pub async fn run_prompt(&self, prompt: &str, history: &[LlmMessage]) -> Result<AgentRun> {
        let user_message = LlmMessage::user(prompt);

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(LlmMessage::system(self.config.instructions.clone()));
        messages.extend_from_slice(history);
        messages.push(user_message.clone());

        debug!(agent = %self.config.name, history = history.len(), "Running prompt");
        let run = self
            .broker
            .run(&messages, Some(&self.tools), self.completion.clone())
            .await?;

        let mut new_messages = Vec::with_capacity(run.new_messages.len() + 1);
        new_messages.push(user_message);
        new_messages.extend(run.new_messages);

        Ok(AgentRun {
            output: run.content,
            new_messages,
            tool_calls: run.tool_calls,
            usage: run.usage,
        })
    }
}
