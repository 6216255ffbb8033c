use super::manager::GitCli;
use crate::error::Result;
use crate::status::{parse_status, StatusEntry};

impl GitCli {
    /// List changed paths in the order git reports them.
    ///
    /// Fails without a partial result if any line is not a status line.
    pub fn status(&self) -> Result<Vec<StatusEntry>> {
        let lines = self.run_lines(&["status", "--porcelain"])?;
        parse_status(&lines)
    }

    /// Stage every change in the working tree, deletions included.
    pub fn stage_all(&self) -> Result<()> {
        self.run_ok(&["add", "-A"])
    }

    /// Commit the staged changes with the configured identity.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run_ok(&["commit", "-m", message])
    }

    /// True when the status listing is non-empty, untracked files included.
    pub fn has_changes(&self) -> Result<bool> {
        Ok(!self.status()?.is_empty())
    }
}
