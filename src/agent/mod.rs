pub mod config;
pub mod runner;
pub mod session;

pub use config::{default_instructions, TodoAgentConfig};
pub use runner::{AgentRun, TodoAgent};
pub use session::{ChatEntry, ChatSession, ChatTurn, ToolLog};
