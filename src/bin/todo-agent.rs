//! Interactive terminal chat with the todo agent
//!
//! Configure with `MY_DAILY_TASKS_URL`, `MY_DAILY_TASKS_MODEL` and `OPENAI_API_KEY` (a `.env`
//! file works too). Type `stop` to quit or `/reset` to start a new conversation.
//!
//! Run with: cargo run --bin todo-agent

use daily_tasks_agent::llm::TOOL_CALL_TARGET;
use daily_tasks_agent::prelude::*;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const STOP_WORD: &str = "stop";
const RESET_COMMAND: &str = "/reset";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tool calls are shown live unless RUST_LOG says otherwise
    let default_filter = format!("warn,{}=info", TOOL_CALL_TARGET);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = AppConfig::from_env();

    let api = Arc::new(HttpTodoApi::new(config.todo_api_url.clone()));
    let tools = all_tools(TodoService::new(api));
    let gateway = Arc::new(OpenAIGateway::with_config(config.openai()));
    let agent_config = TodoAgentConfig::default().with_model(config.model.clone());
    let agent = TodoAgent::new(agent_config, gateway, tools)?;

    let mut session = ChatSession::new(agent);

    println!("My Daily Tasks Agent");
    println!("====================");
    println!("Connected to: {}", config.todo_api_url);
    println!("Type '{}' to quit, '{}' to start over.\n", STOP_WORD, RESET_COMMAND);

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut prompt = String::new();
        if io::stdin().read_line(&mut prompt)? == 0 {
            break;
        }

        let command = prompt.trim();
        if command.eq_ignore_ascii_case(STOP_WORD) {
            break;
        }
        if command == RESET_COMMAND {
            session.reset();
            println!("Conversation reset.\n");
            continue;
        }

        match session.send(command).await {
            ChatTurn::Ignored => println!("Please enter a prompt before sending.\n"),
            ChatTurn::Answered(answer) => println!("Agent: {}\n", answer),
            ChatTurn::Failed(message) => eprintln!("{}\n", message),
        }
    }

    let usage = session.usage();
    println!(
        "\nTokens used: {} prompt, {} completion, {} total",
        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
    );

    Ok(())
}
