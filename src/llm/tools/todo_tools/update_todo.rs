use crate::error::Result;
use crate::llm::tools::{parse_args, LlmTool, ToolDescriptor};
use crate::todo::{TodoPatch, TodoService};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct UpdateTodoArgs {
    todo_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Tool for updating properties of an existing todo
///
/// Fields left out of the call are not sent and stay unchanged.
#[derive(Clone)]
pub struct UpdateTodoTool {
    service: TodoService,
}

impl UpdateTodoTool {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LlmTool for UpdateTodoTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let args: UpdateTodoArgs = parse_args("update_todo", args)?;
        let patch = TodoPatch {
            text: args.title,
            due_date: args.due_date,
            tags: args.tags,
        };

        let todo = self.service.update(&args.todo_id, patch).await?;
        Ok(serde_json::to_value(todo)?)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "update_todo",
            "Update properties of an existing todo. Only the fields provided are changed. Returns the updated todo.",
            json!({
                "type": "object",
                "properties": {
                    "todo_id": {
                        "type": "string",
                        "description": "ID of the todo to update."
                    },
                    "title": {
                        "type": "string",
                        "description": "New title text, if being changed."
                    },
                    "due_date": {
                        "type": "string",
                        "description": "New due date (ISO-8601 string), if being changed."
                    },
                    "tags": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "New list of tags, if being changed."
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
