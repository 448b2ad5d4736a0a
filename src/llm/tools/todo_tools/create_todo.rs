use crate::error::Result;
use crate::llm::tools::{parse_args, LlmTool, ToolDescriptor};
use crate::todo::TodoService;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct CreateTodoArgs {
    title: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Tool for creating a new todo item
#[derive(Clone)]
pub struct CreateTodoTool {
    service: TodoService,
}

impl CreateTodoTool {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LlmTool for CreateTodoTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let args: CreateTodoArgs = parse_args("create_todo", args)?;
        let todo = self.service.create(&args.title, args.due_date, args.tags).await?;
        Ok(serde_json::to_value(todo)?)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "create_todo",
            "Create a new todo item. Returns the created todo.",
            json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Text describing the todo."
                    },
                    "due_date": {
                        "type": "string",
                        "description": "Optional ISO-8601 date/time string for when the todo is due."
                    },
                    "tags": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Optional list of tag strings to categorize the todo."
                    }
                },
                "required": ["title"]
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn LlmTool> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{service, StubApi};
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_descriptor() {
        let tool = CreateTodoTool::new(service(Arc::new(StubApi::default())));
        let descriptor = tool.descriptor();

        assert_eq!(descriptor.function.name, "create_todo");
        assert_eq!(descriptor.function.parameters["required"], json!(["title"]));
        assert!(descriptor.function.parameters["properties"]["tags"].is_object());
    }

    #[tokio::test]
    async fn test_run_creates_todo() {
        let api = Arc::new(StubApi::default());
        let tool = CreateTodoTool::new(service(api.clone()));

        let mut args = HashMap::new();
        args.insert("title".to_string(), json!("Call the dentist"));
        args.insert("due_date".to_string(), json!("2026-10-20T09:00:00"));
        args.insert("tags".to_string(), json!(["health"]));

        let result = tool.run(&args).await.unwrap();

        assert_eq!(result["text"], "Call the dentist");
        assert_eq!(result["dueDate"], "2026-10-20T09:00:00");
        assert_eq!(result["tags"], json!(["health"]));
        assert_eq!(result["completed"], false);
        assert_eq!(api.todos.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_defaults_optional_fields() {
        let tool = CreateTodoTool::new(service(Arc::new(StubApi::default())));

        let mut args = HashMap::new();
        args.insert("title".to_string(), json!("Water plants"));
        args.insert("due_date".to_string(), Value::Null);

        let result = tool.run(&args).await.unwrap();

        assert_eq!(result["dueDate"], Value::Null);
        assert_eq!(result["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_run_missing_title() {
        let tool = CreateTodoTool::new(service(Arc::new(StubApi::default())));

        let result = tool.run(&HashMap::new()).await;
        assert!(result.unwrap_err().to_string().contains("title"));
    }
}
