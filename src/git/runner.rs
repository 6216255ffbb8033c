//! Subprocess driver shared by every facade operation.
//!
//! All process spawning and error classification happens here. The
//! operations elsewhere only build argument lists and shape stdout.

use std::process::Command;

use super::manager::GitCli;
use crate::error::{GitError, Result};

/// Captured result of one git invocation.
#[derive(Debug)]
pub(crate) struct Output {
    pub stdout: Vec<u8>,
    pub stderr: Vec<String>,
    pub code: Option<i32>,
    pub success: bool,
}

impl GitCli {
    /// Spawn git with `args` in the working directory and buffer its output.
    ///
    /// Only a launch failure is an error here. A non-zero exit is reported
    /// through `Output::success`.
    pub(crate) fn invoke(&self, args: &[&str]) -> Result<Output> {
        log::debug!(
            "running '{} {}' in {}",
            self.program,
            args.join(" "),
            self.workdir.display()
        );

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Launch {
                program: self.program.clone(),
                source,
            })?;

        log::trace!(
            "'{} {}' exited with {} ({} bytes stdout, {} bytes stderr)",
            self.program,
            args.first().unwrap_or(&""),
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(Output {
            stderr: read_lines(&output.stderr),
            stdout: output.stdout,
            code: output.status.code(),
            success: output.status.success(),
        })
    }

    /// Run git and return raw stdout, turning a non-zero exit into
    /// `GitError::Command`.
    pub(crate) fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = self.invoke(args)?;
        if output.success {
            return Ok(output.stdout);
        }
        Err(command_error(args, &output))
    }

    /// Run git and ignore stdout.
    pub(crate) fn run_ok(&self, args: &[&str]) -> Result<()> {
        self.run(args).map(|_| ())
    }

    /// Run git and split stdout into lines.
    pub(crate) fn run_lines(&self, args: &[&str]) -> Result<Vec<String>> {
        self.run(args).map(|stdout| read_lines(&stdout))
    }

    /// Run git and decode stdout as text, unmodified.
    pub(crate) fn run_string(&self, args: &[&str]) -> Result<String> {
        self.run(args)
            .map(|stdout| String::from_utf8_lossy(&stdout).into_owned())
    }

    /// Run git and return the first line of stdout. Empty output is a parse error.
    pub(crate) fn run_first_line(&self, args: &[&str]) -> Result<String> {
        self.run_lines(args)?
            .into_iter()
            .next()
            .ok_or_else(|| GitError::parse(args.join(" "), "expected at least one line of output"))
    }
}

/// Build the error for a failed invocation.
///
/// The message is the semicolon-joined stderr lines. Some commands (commit
/// with nothing staged) explain themselves on stdout instead, and a silent
/// failure falls back to naming the command and its exit status.
pub(crate) fn command_error(args: &[&str], output: &Output) -> GitError {
    let lines = if output.stderr.is_empty() {
        read_lines(&output.stdout)
    } else {
        output.stderr.clone()
    };

    let message = if lines.is_empty() {
        match output.code {
            Some(code) => format!("git {} exited with code {code}", args.join(" ")),
            None => format!("git {} was terminated by a signal", args.join(" ")),
        }
    } else {
        lines.join(";")
    };

    GitError::Command {
        args: args.iter().map(|a| a.to_string()).collect(),
        code: output.code,
        message,
    }
}

/// Split buffered output into lines, dropping line terminators.
pub(crate) fn read_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(str::to_string)
        .collect()
}
