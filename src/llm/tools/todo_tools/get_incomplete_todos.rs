use crate::error::Result;
use crate::llm::tools::{LlmTool, ToolDescriptor};
use crate::todo::TodoService;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Tool for listing every todo that has not been completed
#[derive(Clone)]
pub struct GetIncompleteTodosTool {
    service: TodoService,
}

impl GetIncompleteTodosTool {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LlmTool for GetIncompleteTodosTool {
    async fn run(&self, _args: &HashMap<String, Value>) -> Result<Value> {
        let todos = self.service.list_incomplete().await?;
        Ok(serde_json::to_value(todos)?)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "get_incomplete_todos",
            "Retrieve all todos that have not been completed.",
            json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn LlmTool> {
        Box::new(self.clone())
    }
}
