//! File read and write tools.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{path_guard, Tool, ToolError};

#[derive(Deserialize)]
struct ReadArgs {
    file_path: String,
}

#[derive(Deserialize)]
struct WriteArgs {
    file_path: String,
    content: String,
}

/// Read a file's full contents.
pub struct ReadFile;

#[async_trait]
impl Tool for ReadFile {
    fn name(&self) -> &str {
        "Read"
    }

    fn description(&self) -> &str {
        "Read the full contents of a file in the workspace and return them as text."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to read. The file is guaranteed to be less than 100KB in size.",
                    "examples": ["/tmp/file.txt"]
                }
            },
            "required": ["file_path"]
        })
    }

    async fn execute(&self, args: &str, workspace: &Path) -> Result<String, ToolError> {
        let args: ReadArgs = serde_json::from_str(args)?;

        let full = path_guard::validate_read(&args.file_path, workspace)?;
        tracing::info!("Reading file: {}", full.display());

        Ok(tokio::fs::read_to_string(&full).await?)
    }
}

/// Create or overwrite a file.
pub struct WriteFile;

#[async_trait]
impl Tool for WriteFile {
    fn name(&self) -> &str {
        "Write"
    }

    fn description(&self) -> &str {
        "Write content to a file in the workspace, creating it if missing and replacing it entirely if present."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The path to the file to write.",
                    "examples": ["/tmp/file.txt"]
                },
                "content": {
                    "type": "string",
                    "description": "The full content to write to the file."
                }
            },
            "required": ["file_path", "content"]
        })
    }

    async fn execute(&self, args: &str, workspace: &Path) -> Result<String, ToolError> {
        let args: WriteArgs = serde_json::from_str(args)?;

        let full = path_guard::validate_write(&args.file_path, workspace)?;
        tracing::info!("Writing file: {}", full.display());

        tokio::fs::write(&full, &args.content).await?;
        Ok("File written successfully".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_then_read_round_trips_exactly() {
        let dir = tempdir().unwrap();
        let content = "line one\nline two\n\ttabbed";

        let ack = WriteFile
            .execute(
                &json!({"file_path": "notes.txt", "content": content}).to_string(),
                dir.path(),
            )
            .await
            .unwrap();
        assert_eq!(ack, "File written successfully");

        let read_back = ReadFile
            .execute(&json!({"file_path": "notes.txt"}).to_string(), dir.path())
            .await
            .unwrap();
        assert_eq!(read_back, content);
    }

    #[tokio::test]
    async fn write_overwrites_existing_file_in_full() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("out.txt"), "old content that is longer").unwrap();

        WriteFile
            .execute(
                &json!({"file_path": "out.txt", "content": "new"}).to_string(),
                dir.path(),
            )
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(dir.path().join("out.txt")).unwrap(), "new");
    }

    #[tokio::test]
    async fn read_rejects_traversal_before_touching_fs() {
        let dir = tempdir().unwrap();
        let err = ReadFile
            .execute(&json!({"file_path": "../outside.txt"}).to_string(), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = ReadFile
            .execute(&json!({"file_path": "ghost.txt"}).to_string(), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn read_directory_is_rejected() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let err = ReadFile
            .execute(&json!({"file_path": "sub"}).to_string(), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::IsDirectory(_)));
    }

    #[tokio::test]
    async fn malformed_arguments_are_reported_as_such() {
        let dir = tempdir().unwrap();
        let err = ReadFile.execute("not json", dir.path()).await.unwrap_err();
        assert!(matches!(err, ToolError::MalformedArguments(_)));

        let err = WriteFile
            .execute(&json!({"file_path": "a.txt"}).to_string(), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::MalformedArguments(_)));
    }
}
