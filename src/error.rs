use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GwhoError>;

#[derive(Error, Debug)]
pub enum GwhoError {
    #[error("Invalid repository path: {} (missing or not a directory)", path.display())]
    InvalidRepository { path: PathBuf },
    #[error("git {command} failed (exit {exit_code}): {stderr}")]
    QueryFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },
    #[error("Malformed log line {line}: {content:?}")]
    MalformedLogLine { line: usize, content: String },
    #[error("Invalid author filter {author:?}: {reason}")]
    InvalidAuthor { author: String, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
