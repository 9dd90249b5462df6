//! Core agent loop implementation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::conversation::ConversationState;
use crate::llm::{LlmClient, LlmError};
use crate::tools::ToolRegistry;

/// Why the loop stopped.
#[derive(Debug)]
pub enum LoopOutcome {
    /// The model answered with plain text and no further tool calls.
    Done(String),

    /// The API returned a response with zero choices.
    EmptyResponse,

    /// The model requested a tool that was never declared. Protocol
    /// violation; remaining calls in the batch are abandoned.
    UnknownTool(String),
}

/// The autonomous agent.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
}

impl Agent {
    /// Create a new agent over an injected client and registry.
    pub fn new(config: Config, llm: Arc<dyn LlmClient>, tools: ToolRegistry) -> Self {
        Self { config, llm, tools }
    }

    /// Drive the conversation until the model stops requesting tools.
    ///
    /// Tool execution failures are stringified into that call's result and
    /// fed back for the model to react to; only transport/API errors
    /// propagate as `Err`. There is no iteration bound: termination depends
    /// on the model eventually answering without tool calls.
    pub async fn run(&self, prompt: &str) -> Result<LoopOutcome, LlmError> {
        let schemas = self.tools.schemas();
        let mut state = ConversationState::seed(prompt);
        let mut iteration = 0usize;

        loop {
            iteration += 1;
            tracing::debug!("Agent iteration {}", iteration);

            let response = self
                .llm
                .chat_completion(&self.config.model, state.render(), &schemas)
                .await?;

            let Some(choice) = response.choices.into_iter().next() else {
                return Ok(LoopOutcome::EmptyResponse);
            };
            let message = choice.message;

            if message.tool_calls.is_empty() {
                return Ok(LoopOutcome::Done(message.content.unwrap_or_default()));
            }

            let mut results = HashMap::new();
            for call in &message.tool_calls {
                let name = &call.function.name;
                let Some(tool) = self.tools.get(name) else {
                    tracing::error!("Model requested undeclared tool: {}", name);
                    return Ok(LoopOutcome::UnknownTool(name.clone()));
                };

                tracing::info!("Calling tool: {} with args: {}", name, call.function.arguments);
                let result = tool
                    .execute(&call.function.arguments, &self.config.workspace_path)
                    .await;

                let result_text = match result {
                    Ok(output) => output,
                    Err(e) => format!("Error: {}", e),
                };
                results.insert(call.id.clone(), result_text);
            }

            state.append_round(message.tool_calls, results);
        }
    }
}
