mod tool;
pub mod todo_tools;

pub use tool::{parse_args, FunctionDescriptor, LlmTool, ToolDescriptor};
