use std::path::{Path, PathBuf};

use crate::error::{GitError, Result};

/// Executable invoked when no override is configured.
pub const DEFAULT_PROGRAM: &str = "git";

/// Handle on a repository working directory, driven through the git CLI.
///
/// Holds no state beyond the directory and program name, so it can be
/// cloned and shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCli {
    pub(super) workdir: PathBuf,
    pub(super) program: String,
}

impl GitCli {
    /// Create a handle rooted at `path`. Nothing is checked until a command runs.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        GitCli {
            workdir: path.into(),
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different executable in place of `git`.
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    /// Working directory every command runs in.
    pub fn path(&self) -> &Path {
        &self.workdir
    }

    /// Executable invoked for every command.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the configured executable can be run at all.
    pub fn is_available(&self) -> bool {
        self.invoke(&["version"])
            .map(|o| o.success)
            .unwrap_or(false)
    }

    /// First line of `git version`, e.g. `git version 2.43.0`.
    pub fn version(&self) -> Result<String> {
        self.run_first_line(&["version"])
    }

    /// Initialize a repository at the handle's path, creating the directory if needed.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.workdir).map_err(|source| GitError::Workdir {
            path: self.workdir.clone(),
            source,
        })?;

        self.run_ok(&["init"])
    }

    /// Set the repository-local identity used for commits.
    ///
    /// The email is only written once the name was stored successfully.
    pub fn configure_user(&self, name: &str, email: &str) -> Result<()> {
        self.run_ok(&["config", "--local", "user.name", name])?;
        self.run_ok(&["config", "--local", "user.email", email])
    }
}
