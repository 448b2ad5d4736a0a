pub mod api;
pub mod due_date;
pub mod models;
pub mod service;

pub use api::{HttpTodoApi, TodoApi};
pub use due_date::{resolve_due_shortcut, Clock, DueShortcut, FixedClock, SystemClock};
pub use models::{CompletionFilter, NewTodo, Todo, TodoPatch, TodoQuery};
pub use service::TodoService;
