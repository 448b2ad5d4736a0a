use crate::error::{Result, TodoAgentError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Descriptor for tool function parameters
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDescriptor {
    pub r#type: String,
    pub function: FunctionDescriptor,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolDescriptor {
    /// Descriptor of a `function` tool
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            r#type: "function".to_string(),
            function: FunctionDescriptor {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Trait for LLM tools
#[async_trait]
pub trait LlmTool: Send + Sync {
    /// Execute the tool with given arguments
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value>;

    /// Get tool descriptor for LLM
    fn descriptor(&self) -> ToolDescriptor;

    /// Check if this tool matches the given name
    fn matches(&self, name: &str) -> bool {
        self.descriptor().function.name == name
    }

    /// Clone the tool into a Box
    fn clone_box(&self) -> Box<dyn LlmTool>;
}

impl Clone for Box<dyn LlmTool> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Decodes tool arguments into a typed struct
pub fn parse_args<T: DeserializeOwned>(tool: &str, args: &HashMap<String, Value>) -> Result<T> {
    let object: serde_json::Map<String, Value> =
        args.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

    serde_json::from_value(Value::Object(object)).map_err(|e| TodoAgentError::InvalidArguments {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}
