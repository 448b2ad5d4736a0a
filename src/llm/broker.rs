use crate::error::{Result, TodoAgentError};
use crate::llm::gateway::{CompletionConfig, LlmGateway};
use crate::llm::models::{LlmMessage, LlmToolCall, Usage};
use crate::llm::tools::LlmTool;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_MAX_ROUNDS: usize = 10;
const DEFAULT_NAME: &str = "broker";

/// Tracing target of the per-call `TOOL CALL` lines
pub const TOOL_CALL_TARGET: &str = "tool_call";

/// Outcome of a broker run
#[derive(Debug, Clone, Default)]
pub struct BrokerRun {
    /// Final text answer from the model
    pub content: String,
    /// Messages produced during the run: tool requests, tool results, final answer
    pub new_messages: Vec<LlmMessage>,
    /// Tool calls executed, in order
    pub tool_calls: Vec<LlmToolCall>,
    pub usage: Usage,
}

/// Main interface for LLM interactions
pub struct LlmBroker {
    model: String,
    gateway: Arc<dyn LlmGateway>,
    max_rounds: usize,
    name: String,
}

impl LlmBroker {
    /// Create a new LLM broker
    pub fn new(model: impl Into<String>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            model: model.into(),
            gateway,
            max_rounds: DEFAULT_MAX_ROUNDS,
            name: DEFAULT_NAME.to_string(),
        }
    }

    /// Name shown in the `TOOL CALL` log lines
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Bound the number of model round-trips within one run
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generate text response from LLM
    pub async fn generate(
        &self,
        messages: &[LlmMessage],
        tools: Option<&[Box<dyn LlmTool>]>,
        config: Option<CompletionConfig>,
    ) -> Result<String> {
        Ok(self.run(messages, tools, config).await?.content)
    }

    /// Run the conversation until the model answers without requesting tools
    ///
    /// Each requested tool is executed and its JSON result fed back to the model. A tool the
    /// model invents, or arguments it got wrong, are answered with an `{"error": ...}` result so
    /// the model can correct itself. Any other tool failure aborts the run.
    pub async fn run(
        &self,
        messages: &[LlmMessage],
        tools: Option<&[Box<dyn LlmTool>]>,
        config: Option<CompletionConfig>,
    ) -> Result<BrokerRun> {
        let config = config.unwrap_or_default();
        let mut conversation = messages.to_vec();
        let mut run = BrokerRun::default();

        for round in 0..self.max_rounds {
            debug!(round, messages = conversation.len(), "Calling gateway");
            let response =
                self.gateway.complete(&self.model, &conversation, tools, &config).await?;

            if let Some(usage) = response.usage {
                run.usage += usage;
            }

            let tools = match tools {
                Some(tools) if !response.tool_calls.is_empty() => tools,
                _ => {
                    if !response.tool_calls.is_empty() {
                        warn!("LLM requested tool calls but no tools provided");
                    }
                    let content = response.content.unwrap_or_default();
                    run.new_messages.push(LlmMessage::assistant(content.clone()));
                    run.content = content;
                    return Ok(run);
                }
            };

            info!("Tool calls requested: {}", response.tool_calls.len());
            let request =
                LlmMessage::assistant_tool_calls(response.content, response.tool_calls.clone());
            conversation.push(request.clone());
            run.new_messages.push(request);

            for tool_call in &response.tool_calls {
                let tool = match tools.iter().find(|t| t.matches(&tool_call.name)) {
                    Some(tool) => tool,
                    None => {
                        warn!("Tool not found: {}", tool_call.name);
                        let output = json!({ "error": format!("Unknown tool: {}", tool_call.name) });
                        Self::answer(&mut conversation, &mut run, &output, tool_call)?;
                        continue;
                    }
                };

                let output = match &tool_call.invalid_arguments {
                    Some(reason) => {
                        warn!(tool = %tool_call.name, "Refusing tool call: {}", reason);
                        json!({ "error": format!("Invalid arguments for {}: {}", tool_call.name, reason) })
                    }
                    None => {
                        info!(
                            target: TOOL_CALL_TARGET,
                            "TOOL CALL ({}): {}({})",
                            self.name,
                            tool_call.name,
                            tool_call.arguments_json()
                        );
                        match tool.run(&tool_call.arguments).await {
                            Ok(output) => {
                                run.tool_calls.push(tool_call.clone());
                                output
                            }
                            Err(e @ TodoAgentError::InvalidArguments { .. }) => {
                                warn!(tool = %tool_call.name, error = %e, "Tool rejected its arguments");
                                json!({ "error": e.to_string() })
                            }
                            Err(e) => return Err(e),
                        }
                    }
                };

                Self::answer(&mut conversation, &mut run, &output, tool_call)?;
            }
        }

        Err(TodoAgentError::AgentError(format!(
            "No final answer after {} model round-trips",
            self.max_rounds
        )))
    }

    fn answer(
        conversation: &mut Vec<LlmMessage>,
        run: &mut BrokerRun,
        output: &serde_json::Value,
        tool_call: &LlmToolCall,
    ) -> Result<()> {
        let result = LlmMessage::tool_result(serde_json::to_string(output)?, tool_call);
        conversation.push(result.clone());
        run.new_messages.push(result);
        Ok(())
    }
}
