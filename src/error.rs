//! Error types and result aliases for the daily tasks agent.
//!
//! This module defines the core error type [`TodoAgentError`] and the [`Result`] type alias
//! used throughout the crate. Remote failures are never retried; they surface to the caller
//! unchanged so the chat layer can report them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoAgentError {
    #[error("LLM gateway error: {0}")]
    GatewayError(String),

    #[error("Todo API returned {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Agent error: {0}")]
    AgentError(String),
}

pub type Result<T> = std::result::Result<T, TodoAgentError>;
