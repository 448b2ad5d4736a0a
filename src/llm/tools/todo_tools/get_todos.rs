use crate::error::{Result, TodoAgentError};
use crate::llm::tools::{parse_args, LlmTool, ToolDescriptor};
use crate::todo::{CompletionFilter, TodoService};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct GetTodosArgs {
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    tag: Option<String>,
}

/// Tool for retrieving todos filtered by due date, tag and completion status
#[derive(Clone)]
pub struct GetTodosTool {
    service: TodoService,
}

impl GetTodosTool {
    pub fn new(service: TodoService) -> Self {
        Self { service }
    }

    /// Missing means "incomplete only"; an explicit `null` disables the filter
    fn completion_filter(args: &HashMap<String, Value>) -> Result<CompletionFilter> {
        match args.get("completed") {
            None => Ok(CompletionFilter::default()),
            Some(Value::Null) => Ok(CompletionFilter::Any),
            Some(Value::Bool(completed)) => Ok(CompletionFilter::from_flag(Some(*completed))),
            Some(other) => Err(TodoAgentError::InvalidArguments {
                tool: "get_todos".to_string(),
                message: format!("completed must be a boolean or null, got {}", other),
            }),
        }
    }
}

#[async_trait]
impl LlmTool for GetTodosTool {
    async fn run(&self, args: &HashMap<String, Value>) -> Result<Value> {
        let completed = Self::completion_filter(args)?;
        let args: GetTodosArgs = parse_args("get_todos", args)?;

        let todos = self
            .service
            .list(args.due_date.as_deref(), args.tag.as_deref(), completed)
            .await?;
        Ok(serde_json::to_value(todos)?)
    }

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::function(
            "get_todos",
            "Retrieve todos, optionally filtering by due date, tag, and completion status. Returns the todos matching all provided filters.",
            json!({
                "type": "object",
                "properties": {
                    "due_date": {
                        "type": "string",
                        "description": "Return todos due before this point. Either an ISO-8601 date/time string or one of the shortcuts: \"today\", \"tomorrow\", \"this_week\", \"next_week\"."
                    },
                    "tag": {
                        "type": "string",
                        "description": "A tag name to filter by."
                    },
                    "completed": {
                        "type": ["boolean", "null"],
                        "description": "Completion filter: false (default) returns only incomplete todos, true returns only completed todos, null returns all todos."
                    }
                },
                "required": []
            }),
        )
    }

    fn clone_box(&self) -> Box<dyn LlmTool> {
        Box::new(self.clone())
    }
}
