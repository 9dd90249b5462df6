//! Shell command execution tool.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::process::Command;

use super::{Tool, ToolError};

#[derive(Deserialize)]
struct BashArgs {
    command: String,
}

/// Run a shell command in the workspace.
///
/// No timeout is enforced here; the 10-second figure in the description is
/// advisory metadata for the model. Callers needing a hard bound wrap the
/// agent process externally.
pub struct Bash;

#[async_trait]
impl Tool for Bash {
    fn name(&self) -> &str {
        "Bash"
    }

    fn description(&self) -> &str {
        "Execute a bash command in the workspace directory and return its combined stdout and stderr. Commands are expected to complete within 10 seconds."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The bash command to execute.",
                    "examples": ["ls -la"]
                }
            },
            "required": ["command"]
        })
    }

    async fn execute(&self, args: &str, workspace: &Path) -> Result<String, ToolError> {
        let args: BashArgs = serde_json::from_str(args)?;

        tracing::info!("Executing command: {}", args.command);

        let output = Command::new("bash")
            .arg("-c")
            .arg(&args.command)
            .current_dir(workspace)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(ToolError::Launch)?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            // The captured output rides along so the model can diagnose.
            return Err(ToolError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                output: combined,
            });
        }

        Ok(combined)
    }
}
