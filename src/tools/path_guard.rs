//! Path-safety validation for model-supplied file paths.
//!
//! File tools must stay inside the workspace tree. Validation is lexical
//! (no filesystem access except the read-mode stat): a single leading slash
//! is treated as workspace-relative, `.` segments are dropped, and traversal
//! is rejected twice: once against the normalized path and once against the
//! raw input. Normalization semantics differ across platforms, so neither
//! check alone is sufficient.

use std::path::{Component, Path, PathBuf};

use super::ToolError;

/// Validate a raw path for any file operation and return the safe
/// workspace-relative form.
pub fn validate(raw: &str) -> Result<PathBuf, ToolError> {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);
    let clean = lexical_clean(Path::new(trimmed));

    if clean.starts_with("..") {
        return Err(ToolError::InvalidPath(raw.to_string()));
    }

    // Independent check on the raw input: patterns like `a/../../b` can
    // normalize to something that no longer starts with `..` yet still
    // signal traversal intent.
    if raw.contains("..") {
        return Err(ToolError::InvalidPath(raw.to_string()));
    }

    Ok(clean)
}

/// Validate a raw path for reading and return the full path under
/// `workspace`. The target must exist and must not be a directory.
pub fn validate_read(raw: &str, workspace: &Path) -> Result<PathBuf, ToolError> {
    let full = workspace.join(validate(raw)?);

    let metadata = std::fs::metadata(&full).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ToolError::NotFound(raw.to_string())
        } else {
            ToolError::Io(e)
        }
    })?;

    if metadata.is_dir() {
        return Err(ToolError::IsDirectory(raw.to_string()));
    }

    Ok(full)
}

/// Validate a raw path for writing and return the full path under
/// `workspace`. No existence check: a missing file is created, an existing
/// one is truncated.
pub fn validate_write(raw: &str, workspace: &Path) -> Result<PathBuf, ToolError> {
    Ok(workspace.join(validate(raw)?))
}

/// Resolve `.` segments and collapse separators without touching the
/// filesystem. `..` pops a preceding normal segment and is otherwise kept,
/// so an escaping path always surfaces a leading `..`.
fn lexical_clean(path: &Path) -> PathBuf {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let ends_normal =
                    matches!(clean.components().next_back(), Some(Component::Normal(_)));
                if ends_normal {
                    clean.pop();
                } else {
                    clean.push("..");
                }
            }
            other => clean.push(other),
        }
    }
    if clean.as_os_str().is_empty() {
        clean.push(".");
    }
    clean
}
