//! Tools exposing the todo service to the language model.
//!
//! The registry is declared statically by [`all_tools`]; each tool owns a clone of the
//! [`TodoService`] it calls into.

mod create_todo;
mod get_incomplete_todos;
mod get_todos;
mod mark_completed;
mod update_todo;

pub use create_todo::CreateTodoTool;
pub use get_incomplete_todos::GetIncompleteTodosTool;
pub use get_todos::GetTodosTool;
pub use mark_completed::MarkCompletedTool;
pub use update_todo::UpdateTodoTool;

use crate::llm::tools::LlmTool;
use crate::todo::TodoService;

/// Creates every todo tool backed by the same service
///
/// Returns a vector of boxed tools ready to be used with the broker
///
/// # Examples
///
/// ```ignore
/// use daily_tasks_agent::llm::tools::todo_tools::all_tools;
/// use daily_tasks_agent::todo::{HttpTodoApi, TodoService};
/// use std::sync::Arc;
///
/// let service = TodoService::new(Arc::new(HttpTodoApi::new("http://localhost:3000")));
/// let tools = all_tools(service);
/// ```
pub fn all_tools(service: TodoService) -> Vec<Box<dyn LlmTool>> {
    vec![
        Box::new(CreateTodoTool::new(service.clone())),
        Box::new(UpdateTodoTool::new(service.clone())),
        Box::new(MarkCompletedTool::new(service.clone())),
        Box::new(GetIncompleteTodosTool::new(service.clone())),
        Box::new(GetTodosTool::new(service)),
    ]
}
