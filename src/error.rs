//! Error type shared by every facade operation.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, GitError>;

/// Failure of a single git invocation.
///
/// The variants keep "git could not be started", "git rejected the request"
/// and "git answered in an unexpected shape" apart, so callers can react to
/// each one differently.
#[derive(Debug, Error)]
pub enum GitError {
    /// The subprocess could not be spawned (missing executable, permissions).
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran and exited non-zero.
    ///
    /// Displays as the semicolon-joined stderr lines.
    #[error("{message}")]
    Command {
        args: Vec<String>,
        code: Option<i32>,
        message: String,
    },

    /// Output was received but did not have the expected structure.
    #[error("unable to parse output of 'git {command}': {detail}")]
    Parse { command: String, detail: String },

    /// The repository directory could not be prepared.
    #[error("failed to create directory '{}': {source}", .path.display())]
    Workdir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GitError {
    pub(crate) fn parse(command: impl Into<String>, detail: impl Into<String>) -> Self {
        GitError::Parse {
            command: command.into(),
            detail: detail.into(),
        }
    }

    /// Exit code of a failed command, if the process exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitError::Command { code, .. } => *code,
            _ => None,
        }
    }

    pub fn is_launch(&self) -> bool {
        matches!(self, GitError::Launch { .. })
    }

    pub fn is_command(&self) -> bool {
        matches!(self, GitError::Command { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, GitError::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_displays_message_only() {
        let err = GitError::Command {
            args: vec!["checkout".into(), "nope".into()],
            code: Some(1),
            message: "error: pathspec 'nope' did not match;hint: check the name".into(),
        };

        assert_eq!(
            err.to_string(),
            "error: pathspec 'nope' did not match;hint: check the name"
        );
        assert_eq!(err.exit_code(), Some(1));
        assert!(err.is_command());
        assert!(!err.is_parse());
    }

    #[test]
    fn test_parse_error_names_command() {
        let err = GitError::parse("status --porcelain", "unexpected line 'xyz'");
        assert!(err.is_parse());
        assert!(err.to_string().contains("git status --porcelain"));
        assert!(err.to_string().contains("xyz"));
        assert_eq!(err.exit_code(), None);
    }

    #[test]
    fn test_launch_error_keeps_source() {
        let err = GitError::Launch {
            program: "no-such-git".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.is_launch());
        assert!(std::error::Error::source(&err).is_some());
    }
}
