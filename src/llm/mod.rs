pub mod broker;
pub mod gateway;
pub mod gateways;
pub mod models;
pub mod tools;

pub use broker::{BrokerRun, LlmBroker, TOOL_CALL_TARGET};
pub use gateway::{CompletionConfig, LlmGateway};
pub use models::{LlmGatewayResponse, LlmMessage, LlmToolCall, MessageRole, Usage};
pub use tools::{FunctionDescriptor, LlmTool, ToolDescriptor};
