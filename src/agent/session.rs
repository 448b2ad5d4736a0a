//! Conversation state for a front-end talking to the todo agent.
//!
//! A [`ChatSession`] owns the agent history, a transcript meant for display and a per-prompt
//! log of tool activity. Failures end the turn with an error message in the transcript; the
//! agent history only ever grows with completed runs.

use crate::agent::runner::TodoAgent;
use crate::llm::{LlmMessage, MessageRole, Usage};
use tracing::{error, warn};

/// One line of the visible conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: MessageRole,
    pub content: String,
}

/// Tool activity recorded for one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLog {
    pub prompt: String,
    pub entries: Vec<String>,
}

/// Outcome of sending a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTurn {
    /// The prompt was blank and nothing was sent
    Ignored,
    Answered(String),
    Failed(String),
}

pub struct ChatSession {
    agent: TodoAgent,
    history: Vec<LlmMessage>,
    transcript: Vec<ChatEntry>,
    tool_logs: Vec<ToolLog>,
    usage: Usage,
}

impl ChatSession {
    pub fn new(agent: TodoAgent) -> Self {
        Self {
            agent,
            history: Vec::new(),
            transcript: Vec::new(),
            tool_logs: Vec::new(),
            usage: Usage::default(),
        }
    }

    pub async fn send(&mut self, prompt: &str) -> ChatTurn {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            warn!("Ignoring blank prompt");
            return ChatTurn::Ignored;
        }

        self.push_entry(MessageRole::User, prompt);

        match self.agent.run_prompt(prompt, &self.history).await {
            Ok(run) => {
                let entries = run
                    .tool_calls
                    .iter()
                    .map(|call| format!("{}: {}({})", self.agent.name(), call.name, call.arguments_json()))
                    .collect();
                self.tool_logs.push(ToolLog {
                    prompt: prompt.to_string(),
                    entries,
                });

                self.history.extend(run.new_messages);
                self.usage += run.usage;
                self.push_entry(MessageRole::Assistant, &run.output);
                ChatTurn::Answered(run.output)
            }
            Err(e) => {
                error!(error = %e, "Agent run failed");
                let message = format!("Unable to fulfill the request: {}", e);
                self.tool_logs.push(ToolLog {
                    prompt: prompt.to_string(),
                    entries: vec![message.clone()],
                });
                self.push_entry(MessageRole::Assistant, &message);
                ChatTurn::Failed(message)
            }
        }
    }

    /// Forgets the conversation, keeping the agent
    pub fn reset(&mut self) {
        self.history.clear();
        self.transcript.clear();
        self.tool_logs.clear();
        self.usage = Usage::default();
    }

    pub fn agent(&self) -> &TodoAgent {
        &self.agent
    }

    pub fn history(&self) -> &[LlmMessage] {
        &self.history
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        &self.transcript
    }

    pub fn tool_logs(&self) -> &[ToolLog] {
        &self.tool_logs
    }

    /// Tokens used since the session started or was last reset
    pub fn usage(&self) -> Usage {
        self.usage
    }

    fn push_entry(&mut self, role: MessageRole, content: &str) {
        self.transcript.push(ChatEntry {
            role,
            content: content.to_string(),
        });
    }
}
