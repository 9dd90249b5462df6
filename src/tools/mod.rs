//! Tool definitions and the registry dispatch relies on.
//!
//! The tool set is closed: Read, Write, and Bash. Each tool declares its
//! name, description, and JSON parameter schema once; the registry feeds the
//! same records to both the request-side tool declarations and execution
//! dispatch, so the declaration can never drift from the implementation.

mod fs;
pub mod path_guard;
mod shell;

pub use fs::{ReadFile, WriteFile};
pub use shell::Bash;

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::llm::ToolSchema;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid file path: {0}")]
    InvalidPath(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("path is a directory: {0}")]
    IsDirectory(String),

    #[error("malformed arguments: {0}")]
    MalformedArguments(#[from] serde_json::Error),

    #[error("failed to launch subprocess: {0}")]
    Launch(std::io::Error),

    #[error("command exited with status {status}, output: {output}")]
    CommandFailed { status: i32, output: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A tool the model can call.
///
/// `execute` receives the raw argument blob exactly as the model sent it;
/// each tool deserializes it into its own typed argument struct.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn parameters_schema(&self) -> Value;

    async fn execute(&self, args: &str, workspace: &Path) -> Result<String, ToolError>;
}

/// Immutable name-to-handler table over the fixed tool set.
///
/// Constructed once at startup and handed to the agent; lookup of an
/// unregistered name returns `None` and the caller decides what that means
/// (for the agent loop it is a fatal protocol violation).
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: vec![Box::new(ReadFile), Box::new(WriteFile), Box::new(Bash)],
        }
    }

    /// Look up a tool by its declared name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// Tool declarations to send with every chat-completion request.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|tool| {
                ToolSchema::function(tool.name(), tool.description(), tool.parameters_schema())
            })
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
