//! # minagent
//!
//! A minimal command-line coding agent.
//!
//! This library provides:
//! - A tool-based agent loop over an OpenRouter chat-completions endpoint
//! - Three built-in tools: Read, Write, and Bash
//! - Path-safety validation keeping file tools inside the workspace
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Seed the conversation with the user's prompt
//! 2. Call the LLM with the fixed tool declarations
//! 3. Execute any requested tool calls, feed results back by call id
//! 4. Repeat until the model answers with plain text
//!
//! ## Example
//!
//! ```rust,ignore
//! use minagent::{agent::Agent, config::Config, llm::OpenRouterClient, tools::ToolRegistry};
//!
//! let config = Config::from_env()?;
//! let llm = std::sync::Arc::new(OpenRouterClient::new(
//!     config.api_key.clone(),
//!     config.base_url.clone(),
//! ));
//! let tools = ToolRegistry::new();
//! let outcome = Agent::new(config, llm, tools).run("list the workspace").await?;
//! ```

pub mod agent;
pub mod config;
pub mod conversation;
pub mod llm;
pub mod tools;

pub use config::Config;
