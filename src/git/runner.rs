use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::error::{GwhoError, Result};
use crate::git::log::parse_count;

/// Handle to a repository working directory. All queries shell out to the
/// `git` binary and capture stdout; nothing here reads `.git` directly.
#[derive(Debug)]
pub struct GitRunner {
    root: PathBuf,
}

impl GitRunner {
    /// Open the repository at `path`, falling back to the current directory.
    ///
    /// Only checks that the path exists and is a directory. Whether it is an
    /// actual git repository surfaces later as a failed query.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let root = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !root.is_dir() {
            return Err(GwhoError::InvalidRepository { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full history, one `<author>|<unix-seconds> <tz>` line per commit.
    pub fn full_log(&self) -> Result<String> {
        self.run(&["log", "--format=%an|%ad", "--date=raw"])
    }

    /// Paths touched by the author's commits. The empty pretty format strips
    /// commit headers, leaving bare paths separated by blank lines.
    pub fn files_for_author(&self, author: &str) -> Result<String> {
        validate_author(author)?;
        let author_arg = format!("--author={author}");
        self.run(&["log", &author_arg, "--name-only", "--pretty=format:"])
    }

    /// Commit count for the author from `rev-list --count`. Counts every
    /// matching commit reachable from HEAD, including ones the name-only
    /// file listing cannot surface because they touch no files (merges,
    /// empty commits).
    pub fn commit_count(&self, author: &str) -> Result<usize> {
        validate_author(author)?;
        let author_arg = format!("--author={author}");
        let stdout = self.run(&["rev-list", "--count", "HEAD", &author_arg])?;
        parse_count(&stdout)
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.first().copied().unwrap_or_default();
        debug!(
            event = "git.query_started",
            command = command,
            path = %self.root.display(),
        );

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| {
                warn!(event = "git.spawn_failed", command = command, error = %e);
                GwhoError::QueryFailed {
                    command: command.to_string(),
                    exit_code: -1,
                    stderr: format!("failed to spawn git: {e}"),
                }
            })?;

        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                event = "git.query_failed",
                command = command,
                exit_code = exit_code,
                stderr = %stderr,
            );
            return Err(GwhoError::QueryFailed {
                command: command.to_string(),
                exit_code,
                stderr,
            });
        }

        debug!(
            event = "git.query_completed",
            command = command,
            bytes = output.stdout.len(),
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Author filters are passed to git verbatim inside a single `--author=`
/// argument, so no quoting can break out of it. Control characters are still
/// rejected to keep logs and error output sane.
fn validate_author(author: &str) -> Result<()> {
    if author.chars().any(char::is_control) {
        return Err(GwhoError::InvalidAuthor {
            author: author.to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }
    Ok(())
}
