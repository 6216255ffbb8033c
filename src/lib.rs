//! # gitshell
//!
//! A typed facade over the `git` command-line tool.
//!
//! ## Overview
//!
//! `gitshell` runs git subcommands as subprocesses inside a repository
//! directory and turns their plain-text output into typed values: status
//! entries, commit hashes, path lists and blob content. Object storage,
//! diffing and merging all stay inside git itself.
//!
//! ```no_run
//! use gitshell::GitCli;
//!
//! # fn main() -> gitshell::Result<()> {
//! let git = GitCli::new("/tmp/repo");
//! git.init()?;
//! git.configure_user("Jane Doe", "jane@example.com")?;
//! std::fs::write("/tmp/repo/readme.md", "# hello").unwrap();
//! git.stage_all()?;
//! git.commit("Initial commit")?;
//! assert_eq!(git.log()?.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - The command facade itself ([`git`])
//! - Parsing of short-format status output ([`status`])
//! - Error classification ([`error`])
//! - Settings and logging for the command-line front end ([`config`], [`logger`])

/// Platform-agnostic configuration directory and settings file.
pub mod config;

/// Launch, command and parse failures of git invocations.
pub mod error;

/// Repository handle and every facade operation.
///
/// Each method builds an argument list, runs git in the handle's directory
/// and parses stdout. Process spawning and error classification live in one
/// internal helper.
pub mod git;

/// Logging configuration.
pub mod logger;

/// Short-format status lines and the change-kind lookup table.
pub mod status;

pub use error::{GitError, Result};
pub use git::GitCli;
pub use status::{ChangeKind, StatusEntry};
