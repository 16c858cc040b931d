use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageLintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a git repository: {}", .0.display())]
    Repository(PathBuf),

    #[error("Please do not use special characters in file names and paths: {0}")]
    ForbiddenCharacter(String),

    #[error("Staged path escapes the repository: {0}")]
    UnsafePath(String),

    #[error("`{command}` failed: {message}")]
    Git { command: String, message: String },

    #[error("Linter executable not found: {tool} (is it installed and on PATH?)")]
    ToolNotFound { tool: String },

    #[error("{0}")]
    Other(String),
}
