//! Application settings read from the environment.
//!
//! Values may come from a `.env` file; blank variables fall back to the defaults.

use crate::agent::config::DEFAULT_MODEL;
use crate::llm::gateways::openai::{OpenAIConfig, DEFAULT_OPENAI_BASE_URL};

pub const DEFAULT_TODO_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the todo service
    pub todo_api_url: String,
    /// `openai:<model>` or a bare model name
    pub model: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            todo_api_url: read("MY_DAILY_TASKS_URL", DEFAULT_TODO_API_URL),
            model: read("MY_DAILY_TASKS_MODEL", DEFAULT_MODEL),
            openai_api_key: read("OPENAI_API_KEY", ""),
            openai_base_url: read("OPENAI_API_ENDPOINT", DEFAULT_OPENAI_BASE_URL),
        }
    }

    pub fn openai(&self) -> OpenAIConfig {
        OpenAIConfig {
            api_key: self.openai_api_key.clone(),
            base_url: self.openai_base_url.clone(),
            timeout: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config.todo_api_url, "http://localhost:3000");
        assert_eq!(config.model, "openai:gpt-4o-mini");
        assert_eq!(config.openai_api_key, "");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_values_from_environment() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MY_DAILY_TASKS_URL", "http://todos.internal:8080"),
            ("MY_DAILY_TASKS_MODEL", "openai:gpt-4o"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_API_ENDPOINT", "http://localhost:11434/v1"),
        ]));

        assert_eq!(config.todo_api_url, "http://todos.internal:8080");
        assert_eq!(config.model, "openai:gpt-4o");

        let openai = config.openai();
        assert_eq!(openai.api_key, "sk-test");
        assert_eq!(openai.base_url, "http://localhost:11434/v1");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[("MY_DAILY_TASKS_URL", "  "), ("MY_DAILY_TASKS_MODEL", "")]));

        assert_eq!(config.todo_api_url, DEFAULT_TODO_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
