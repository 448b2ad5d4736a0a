//! A conversational agent that manages personal todos.
//!
//! The language model is given a small set of tools backed by a remote todo HTTP API: create,
//! update, mark completed and filtered listing. Due-date filters accept the shortcuts
//! `today`, `tomorrow`, `this_week` and `next_week`.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod todo;

pub use error::{Result, TodoAgentError};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agent::{ChatSession, ChatTurn, TodoAgent, TodoAgentConfig};
    pub use crate::config::AppConfig;
    pub use crate::error::{Result, TodoAgentError};
    pub use crate::llm::gateways::OpenAIGateway;
    pub use crate::llm::tools::todo_tools::all_tools;
    pub use crate::llm::{CompletionConfig, LlmBroker, LlmGateway, LlmMessage, LlmTool};
    pub use crate::todo::{HttpTodoApi, TodoApi, TodoService};
}
