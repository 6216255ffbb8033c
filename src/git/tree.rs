use super::manager::GitCli;
use crate::error::Result;

impl GitCli {
    /// Paths that differ between two commits, recursively.
    pub fn diff(&self, from: &str, to: &str) -> Result<Vec<String>> {
        self.run_lines(&["diff-tree", "--no-commit-id", "-r", "--name-only", from, to])
    }

    /// Text content of `path` as stored in `commit`.
    pub fn blob(&self, commit: &str, path: &str) -> Result<String> {
        self.run_string(&["show", &object_spec(commit, path)])
    }

    /// Raw bytes of `path` as stored in `commit`.
    pub fn blob_bytes(&self, commit: &str, path: &str) -> Result<Vec<u8>> {
        self.run(&["cat-file", "blob", &object_spec(commit, path)])
    }

    /// Every file path present in `commit`, recursively.
    pub fn ls_tree(&self, commit: &str) -> Result<Vec<String>> {
        self.run_lines(&["ls-tree", "--name-only", "-r", commit])
    }
}

fn object_spec(commit: &str, path: &str) -> String {
    format!("{commit}:{path}")
}
