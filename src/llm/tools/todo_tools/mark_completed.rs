use crate::error::Result;
use crate::llm::tools::{parse_args, LlmTool, ToolDescriptor};
use crate::todo::TodoService;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct MarkCompletedArgs {
    todo_id: String,
}

/// Tool for marking a todo as completed
#[derive(Clone)]
pub struct MarkCompletedTool {
    service: TodoService,
}

impl MarkCompletedTool {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LlmTool for MarkCompletedTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let args: MarkCompletedArgs = parse_args("mark_completed", args)?;
        let todo = self.service.mark_completed(&args.todo_id).await?;
        Ok(serde_json::to_value(todo)?)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "mark_completed",
            "Mark a todo as completed. Returns the updated todo reflecting completed status.",
            json!({
                "type": "object",
                "properties": {
                    "todo_id": {
                        "type": "string",
                        "description": "ID of the todo to complete."
                    }
                },
                "required": ["todo_id"]
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn LlmTool> {
        Box::new(self.clone())
    }
}
