use serde::{Deserialize, Serialize};

/// A todo record as returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for creating a todo
///
/// `dueDate` is always sent, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub text: String,
    pub due_date: Option<String>,
    pub tags: Vec<String>,
}

impl NewTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_tags(mut self, tags: Option<Vec<String>>) -> Self {
        self.tags = tags.unwrap_or_default();
        self
    }
}

/// Partial update for a todo
///
/// Only the fields that are set are sent; the others stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.due_date.is_none() && self.tags.is_none()
    }
}

/// Server-side filters for listing todos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Client-side completion filter applied to listed todos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    #[default]
    Incomplete,
    Completed,
    Any,
}

impl CompletionFilter {
    /// Maps the tri-state `completed` flag: `None` disables the filter
    pub fn from_flag(completed: Option<bool>) -> Self {
        match completed {
            Some(false) => Self::Incomplete,
            Some(true) => Self::Completed,
            None => Self::Any,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::Incomplete => !todo.completed,
            Self::Completed => todo.completed,
            Self::Any => true,
        }
    }

    pub fn apply(&self, todos: Vec<Todo>) -> Vec<Todo> {
        todos.into_iter().filter(|t| self.matches(t)).collect()
    }
}
