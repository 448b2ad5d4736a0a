use crate::error::Result;
use crate::todo::api::TodoApi;
use crate::todo::due_date::{resolve_due_shortcut, Clock, SystemClock};
use crate::todo::models::{CompletionFilter, NewTodo, Todo, TodoPatch, TodoQuery};
use std::sync::Arc;
use tracing::{debug, warn};

/// Todo operations exposed to the agent
///
/// Every call round-trips to the remote service. Completion filtering is the only work done
/// locally; due-date and tag filters are sent to the server.
#[derive(Clone)]
pub struct TodoService {
    api: Arc<dyn TodoApi>,
    clock: Arc<dyn Clock>,
}

impl TodoService {
    /// Create a service using the system clock
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self::with_clock(api, Arc::new(SystemClock))
    }

    /// Create a service whose due-date shortcuts are anchored to `clock`
    pub fn with_clock(api: Arc<dyn TodoApi>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }

    pub async fn create(
        &self,
        title: &str,
        due_date: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Todo> {
        let payload = NewTodo::new(title).with_due_date(due_date).with_tags(tags);
        self.api.create(&payload).await
    }

    /// Updates only the supplied fields
    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<Todo> {
        self.api.update(id, &patch).await
    }

    /// Ensures the todo ends up completed
    ///
    /// The remote service only offers a toggle. When the toggle leaves the todo incomplete it
    /// was already done, so it is toggled back. The two requests are not atomic: a concurrent
    /// change between them can still leave the todo incomplete.
    pub async fn mark_completed(&self, id: &str) -> Result<Todo> {
        let todo = self.api.toggle(id).await?;
        if todo.completed {
            return Ok(todo);
        }

        warn!(todo_id = id, "Toggle un-completed the todo, toggling again");
        self.api.toggle(id).await
    }

    pub async fn list_incomplete(&self) -> Result<Vec<Todo>> {
        let todos = self.api.list(&TodoQuery::default()).await?;
        Ok(CompletionFilter::Incomplete.apply(todos))
    }

    /// Lists todos due before `due_date` (shortcut or literal) and tagged `tag`
    ///
    /// Empty strings count as absent filters.
    pub async fn list(
        &self,
        due_date: Option<&str>,
        tag: Option<&str>,
        completed: CompletionFilter,
    ) -> Result<Vec<Todo>> {
        let query = self.build_query(due_date, tag);
        debug!(query = ?query, filter = ?completed, "Listing todos");

        let todos = self.api.list(&query).await?;
        Ok(completed.apply(todos))
    }

    fn build_query(&self, due_date: Option<&str>, tag: Option<&str>) -> TodoQuery {
        let due_before = due_date.filter(|d| !d.is_empty()).map(|d| {
            resolve_due_shortcut(d, self.clock.now()).unwrap_or_else(|| d.to_string())
        });

        TodoQuery {
            due_before,
            tags: tag.filter(|t| !t.is_empty()).map(String::from),
        }
    }
}
