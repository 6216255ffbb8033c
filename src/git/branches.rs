use super::manager::GitCli;
use super::runner::{command_error, read_lines};
use crate::error::Result;

/// Messages git prints when `HEAD` names a branch with no commits yet.
const UNBORN_BRANCH_MARKERS: [&str; 2] = [
    "does not have any commits yet",
    "bad default revision 'HEAD'",
];

impl GitCli {
    /// Commit hashes reachable from `HEAD`, most recent first.
    ///
    /// An unborn branch has no history and yields an empty list.
    pub fn log(&self) -> Result<Vec<String>> {
        let args = ["log", "--pretty=%H"];
        let output = self.invoke(&args)?;
        if output.success {
            return Ok(read_lines(&output.stdout));
        }
        if is_unborn_branch(&output.stderr) {
            return Ok(Vec::new());
        }
        Err(command_error(&args, &output))
    }

    /// Switch the working tree to a branch name or commit.
    pub fn checkout(&self, reference: &str) -> Result<()> {
        self.run_ok(&["checkout", reference])
    }

    /// Create a branch at `HEAD` and check it out.
    pub fn create_branch(&self, name: &str) -> Result<()> {
        self.run_ok(&["checkout", "-b", name])
    }

    /// Best common ancestor of two commits.
    pub fn merge_base(&self, first: &str, second: &str) -> Result<String> {
        self.run_first_line(&["merge-base", first, second])
    }

    /// Resolve a symbolic or relative reference (`HEAD`, `main~1`) to a commit hash.
    pub fn rev_parse(&self, reference: &str) -> Result<String> {
        self.run_first_line(&["rev-parse", reference])
    }

    /// Name of the checked-out branch. Empty when `HEAD` is detached.
    pub fn current_branch(&self) -> Result<String> {
        Ok(self
            .run_lines(&["branch", "--show-current"])?
            .into_iter()
            .next()
            .unwrap_or_default())
    }
}

fn is_unborn_branch(stderr: &[String]) -> bool {
    stderr
        .iter()
        .any(|line| UNBORN_BRANCH_MARKERS.iter().any(|m| line.contains(m)))
}
