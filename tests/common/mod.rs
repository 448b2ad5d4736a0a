#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use daily_tasks_agent::error::{Result, TodoAgentError};
use daily_tasks_agent::llm::{
    CompletionConfig, LlmGateway, LlmGatewayResponse, LlmMessage, LlmTool, LlmToolCall,
};
use daily_tasks_agent::todo::{NewTodo, Todo, TodoApi, TodoPatch, TodoQuery};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the todo service, applying `dueBefore` and `tags` like the server
pub struct InMemoryTodoApi {
    todos: Mutex<Vec<Todo>>,
    next_id: Mutex<u64>,
}

impl InMemoryTodoApi {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
            next_id: Mutex::new(1_000_000_000_001),
        }
    }

    pub fn get(&self, id: &str) -> Option<Todo> {
        self.todos.lock().unwrap().iter().find(|t| t.id == id).cloned()
    }

    fn not_found(id: &str) -> TodoAgentError {
        TodoAgentError::RemoteStatus {
            status: 404,
            body: format!("Todo {} does not exist", id),
        }
    }
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[async_trait]
impl TodoApi for InMemoryTodoApi {
    async fn create(&self, todo: &NewTodo) -> Result<Todo> {
        let mut next_id = self.next_id.lock().unwrap();
        let created = Todo {
            id: next_id.to_string(),
            text: todo.text.clone(),
            due_date: todo.due_date.clone(),
            tags: todo.tags.clone(),
            completed: false,
        };
        *next_id += 1;
        self.todos.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<Todo> {
        let mut todos = self.todos.lock().unwrap();
        let todo = todos.iter_mut().find(|t| t.id == id).ok_or_else(|| Self::not_found(id))?;
        if let Some(text) = &patch.text {
            todo.text = text.clone();
        }
        if let Some(due_date) = &patch.due_date {
            todo.due_date = Some(due_date.clone());
        }
        if let Some(tags) = &patch.tags {
            todo.tags = tags.clone();
        }
        Ok(todo.clone())
    }

    async fn toggle(&self, id: &str) -> Result<Todo> {
        let mut todos = self.todos.lock().unwrap();
        let todo = todos.iter_mut().find(|t| t.id == id).ok_or_else(|| Self::not_found(id))?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>> {
        let due_before = query.due_before.as_deref().and_then(parse_timestamp);

        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .filter(|t| match due_before {
                Some(limit) => t
                    .due_date
                    .as_deref()
                    .and_then(parse_timestamp)
                    .is_some_and(|due| due <= limit),
                None => true,
            })
            .filter(|t| match &query.tags {
                Some(tag) => t.tags.contains(tag),
                None => true,
            })
            .cloned()
            .collect())
    }
}

/// Gateway that plays back canned responses and records what it was sent
pub struct ScriptedGateway {
    script: Mutex<Vec<LlmGatewayResponse>>,
    pub requests: Mutex<Vec<Vec<LlmMessage>>>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<LlmGatewayResponse>) -> Self {
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(
        &self,
        _model: &str,
        messages: &[LlmMessage],
        _tools: Option<&[Box<dyn LlmTool>]>,
        _config: &CompletionConfig,
    ) -> Result<LlmGatewayResponse> {
        self.requests.lock().unwrap().push(messages.to_vec());
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(TodoAgentError::GatewayError("script exhausted".to_string()));
        }
        Ok(script.remove(0))
    }
}

pub fn call(name: &str, arguments: Value) -> LlmGatewayResponse {
    let arguments: HashMap<String, Value> = serde_json::from_value(arguments).unwrap();
    LlmGatewayResponse {
        content: None,
        tool_calls: vec![LlmToolCall {
            id: Some(format!("call_{}", name)),
            name: name.to_string(),
            arguments,
            invalid_arguments: None,
        }],
        usage: None,
    }
}

pub fn answer(text: &str) -> LlmGatewayResponse {
    LlmGatewayResponse {
        content: Some(text.to_string()),
        ..Default::default()
    }
}

pub fn todo(id: &str, text: &str, due_date: Option<&str>, tags: &[&str]) -> Todo {
    Todo {
        id: id.to_string(),
        text: text.to_string(),
        due_date: due_date.map(String::from),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        completed: false,
    }
}
