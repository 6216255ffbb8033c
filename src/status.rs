//! Parsing of `git status --porcelain` output.
//!
//! Each line has the form `XY path`. The code is matched against a fixed
//! pattern and translated through a static table. A line that does not match
//! fails the whole listing, so callers never see a partial result.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{GitError, Result};

/// Pattern for a single short-format status line: code, whitespace, path.
static STATUS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s?(\?\?|[MTADRCU]{1,2})\s+(.+)$").expect("status pattern is valid")
});

/// Short status codes understood by the lookup.
static CHANGE_KINDS: phf::Map<&'static str, ChangeKind> = phf::phf_map! {
    "??" => ChangeKind::Untracked,
    "A" => ChangeKind::Added,
    "M" => ChangeKind::Modified,
    "D" => ChangeKind::Deleted,
    "R" => ChangeKind::Renamed,
};

/// How a path differs from the last commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Untracked,
    Added,
    Modified,
    Renamed,
    Deleted,
    /// A well-formed code with no entry in the table (`T`, `C`, `UU`, ...).
    Unknown,
}

impl ChangeKind {
    /// Translate a status code. Exact matches win, then the index letter,
    /// then the worktree letter. Unmerged codes and anything else map to
    /// `Unknown`.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if let Some(kind) = CHANGE_KINDS.get(code) {
            return *kind;
        }
        if is_unmerged(code) {
            return ChangeKind::Unknown;
        }

        code.chars()
            .find_map(|c| CHANGE_KINDS.get(c.to_string().as_str()).copied())
            .unwrap_or(ChangeKind::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Untracked => "untracked",
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Merge conflict codes: either side `U`, or both sides added or deleted.
fn is_unmerged(code: &str) -> bool {
    code.contains('U') || code == "AA" || code == "DD"
}

/// One changed path reported by the status listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    /// Path relative to the repository root. For renames, the new path.
    pub path: String,
    pub kind: ChangeKind,
    /// Raw status code as printed by git, without padding.
    pub code: String,
    /// Source path of a rename or copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_path: Option<String>,
}

/// Parse one status line.
pub fn parse_status_line(line: &str) -> Result<StatusEntry> {
    let caps = STATUS_LINE
        .captures(line)
        .ok_or_else(|| GitError::parse("status", format!("unexpected status line '{line}'")))?;

    let code = caps[1].to_string();
    let kind = ChangeKind::from_code(&code);
    let raw_path = &caps[2];

    let (path, original_path) = if code.contains(|c: char| c == 'R' || c == 'C') {
        match raw_path.split_once(" -> ") {
            Some((from, to)) => (unquote(to), Some(unquote(from))),
            None => (unquote(raw_path), None),
        }
    } else {
        (unquote(raw_path), None)
    };

    Ok(StatusEntry {
        path,
        kind,
        code,
        original_path,
    })
}

/// Parse every line of a status listing, in order. Any unmatched line
/// aborts the whole parse.
pub fn parse_status<S: AsRef<str>>(lines: &[S]) -> Result<Vec<StatusEntry>> {
    lines
        .iter()
        .map(|line| parse_status_line(line.as_ref()))
        .collect()
}

/// Undo git's C-style quoting of unusual paths. Unquoted input is returned as is.
fn unquote(path: &str) -> String {
    let inner = match path
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner,
        None => return path.to_string(),
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('"') => bytes.push(b'"'),
            Some('\\') => bytes.push(b'\\'),
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(next) => {
                            value = value * 8 + next;
                            chars.next();
                        }
                        None => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => {
                bytes.push(b'\\');
                let mut buf = [0; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("?? readme.md", "readme.md", ChangeKind::Untracked)]
    #[case("A  readme.md", "readme.md", ChangeKind::Added)]
    #[case("A readme.md", "readme.md", ChangeKind::Added)]
    #[case("M  src/lib.rs", "src/lib.rs", ChangeKind::Modified)]
    #[case(" M src/lib.rs", "src/lib.rs", ChangeKind::Modified)]
    #[case(" D gone.txt", "gone.txt", ChangeKind::Deleted)]
    #[case("AM notes.txt", "notes.txt", ChangeKind::Added)]
    #[case("M  Makefile", "Makefile", ChangeKind::Modified)]
    #[case("?? dir with space/file", "dir with space/file", ChangeKind::Untracked)]
    fn test_parse_known_codes(#[case] line: &str, #[case] path: &str, #[case] kind: ChangeKind) {
        let entry = parse_status_line(line).unwrap();
        assert_eq!(entry.path, path);
        assert_eq!(entry.kind, kind);
        assert_eq!(entry.original_path, None);
    }

    #[rstest]
    #[case("UU conflict.txt", "UU")]
    #[case("DU conflict.txt", "DU")]
    #[case("UD conflict.txt", "UD")]
    #[case("AA conflict.txt", "AA")]
    #[case("DD conflict.txt", "DD")]
    #[case("AU conflict.txt", "AU")]
    #[case("UA conflict.txt", "UA")]
    #[case(" T link", "T")]
    #[case("C  copy.txt", "C")]
    fn test_unlisted_code_is_lenient(#[case] line: &str, #[case] code: &str) {
        let entry = parse_status_line(line).unwrap();
        assert_eq!(entry.kind, ChangeKind::Unknown);
        assert_eq!(entry.code, code);
    }

    #[test]
    fn test_rename_splits_paths() {
        let entry = parse_status_line("R  old.txt -> new.txt").unwrap();
        assert_eq!(entry.kind, ChangeKind::Renamed);
        assert_eq!(entry.path, "new.txt");
        assert_eq!(entry.original_path.as_deref(), Some("old.txt"));
    }

    #[test]
    fn test_quoted_path_is_unquoted() {
        let entry = parse_status_line(r#"?? "a \"b\"\tc""#).unwrap();
        assert_eq!(entry.path, "a \"b\"\tc");

        let entry = parse_status_line(r#"?? "caf\303\251.txt""#).unwrap();
        assert_eq!(entry.path, "café.txt");
    }

    #[rstest]
    #[case("")]
    #[case("readme.md")]
    #[case("XX readme.md")]
    #[case("M")]
    #[case("## main...origin/main")]
    fn test_malformed_line_is_parse_error(#[case] line: &str) {
        let err = parse_status_line(line).unwrap_err();
        assert!(err.is_parse(), "expected parse error for {line:?}");
    }

    #[test]
    fn test_listing_is_all_or_nothing() {
        let lines = ["?? a.txt", "garbage", "A  b.txt"];
        assert!(parse_status(&lines).unwrap_err().is_parse());
    }

    #[test]
    fn test_listing_preserves_order() {
        let lines = ["?? z.txt", "A  a.txt", " M m.txt"];
        let entries = parse_status(&lines).unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["z.txt", "a.txt", "m.txt"]);
    }

    #[test]
    fn test_empty_listing() {
        let lines: [&str; 0] = [];
        assert!(parse_status(&lines).unwrap().is_empty());
    }

    #[test]
    fn test_change_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeKind::Untracked).unwrap();
        assert_eq!(json, "\"untracked\"");
    }
}
