//! minagent - CLI entry point.
//!
//! Sends a single prompt through the tool-calling agent loop and prints the
//! model's final answer on stdout. Logs go to stderr so stdout stays clean.

use std::sync::Arc;

use clap::Parser;
use minagent::agent::{Agent, LoopOutcome};
use minagent::config::Config;
use minagent::llm::OpenRouterClient;
use minagent::tools::ToolRegistry;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Minimal command-line coding agent.
#[derive(Parser)]
#[command(name = "minagent", version, about)]
struct Cli {
    /// Prompt to send to the model
    #[arg(short, long)]
    prompt: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minagent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.prompt.trim().is_empty() {
        anyhow::bail!("Prompt must not be empty");
    }

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration: model={}", config.model);

    let llm = Arc::new(OpenRouterClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
    ));
    let tools = ToolRegistry::new();
    let agent = Agent::new(config, llm, tools);

    match agent.run(&cli.prompt).await? {
        LoopOutcome::Done(text) => println!("{}", text),
        LoopOutcome::EmptyResponse => eprintln!("Model returned a response with no choices"),
        LoopOutcome::UnknownTool(name) => {
            eprintln!("Model requested undeclared tool: {}", name)
        }
    }

    Ok(())
}
