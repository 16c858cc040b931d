//! Git gateway for linting staged content.
//!
//! Every query shells out to the installed `git` client from the repository
//! root. Content is always read from the index (`git show :path`), never from
//! the working tree, so edits made after `git add` are invisible to linters.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::StageLintError;

/// The well-known hash of git's empty tree, used as the diff baseline in a
/// repository that has no commits yet.
pub const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Characters that would need quoting or escaping in a shell: whitespace,
/// quotes, and the escape character.
const FORBIDDEN_CHARACTERS: &[char] = &[' ', '\t', '\r', '\n', '\'', '"', '\\'];

/// Handle to one git repository, rooted at its top-level directory.
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
}

impl GitRepository {
    /// Opens the repository containing `start_dir`.
    ///
    /// `start_dir` may be the repository root or any directory below it.
    ///
    /// # Errors
    ///
    /// Returns [`StageLintError::Repository`] if `start_dir` is not inside a
    /// git working tree.
    pub fn open(start_dir: &Path) -> Result<Self, StageLintError> {
        if !start_dir.is_dir() {
            return Err(StageLintError::Repository(start_dir.to_path_buf()));
        }

        let output = run_git(start_dir, &["rev-parse", "--show-toplevel"])?;
        if !output.status.success() {
            return Err(StageLintError::Repository(start_dir.to_path_buf()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout.trim_end_matches(['\n', '\r']);
        if root.is_empty() {
            return Err(StageLintError::Repository(start_dir.to_path_buf()));
        }

        debug!(root, "opened git repository");
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Absolute path of the repository's top-level directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves the revision the index is compared against.
    ///
    /// Returns the `HEAD` commit hash, or [`EMPTY_TREE`] when the repository
    /// has no commits yet.
    pub fn resolve_baseline(&self) -> Result<String, StageLintError> {
        let output = run_git(&self.root, &["rev-parse", "--verify", "--quiet", "HEAD"])?;
        let head = String::from_utf8_lossy(&output.stdout).trim().to_string();

        let baseline = if output.status.success() && !head.is_empty() {
            head
        } else {
            EMPTY_TREE.to_string()
        };
        debug!(%baseline, "resolved diff baseline");
        Ok(baseline)
    }

    /// Lists the paths staged for commit, relative to the repository root.
    ///
    /// Paths come back in git's order. Staged deletions are left out since
    /// there is no index content to lint for them.
    ///
    /// Paths are read NUL-terminated (`-z`) so git never C-quotes them; a
    /// non-ASCII name arrives verbatim and a name with a newline stays whole.
    pub fn staged_paths(&self) -> Result<Vec<String>, StageLintError> {
        let baseline = self.resolve_baseline()?;
        let stdout = self.checked(&[
            "diff",
            "--cached",
            "--name-only",
            "-z",
            "--diff-filter=d",
            baseline.as_str(),
        ])?;

        let paths: Vec<String> = String::from_utf8_lossy(&stdout)
            .split('\0')
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();

        debug!(count = paths.len(), "listed staged paths");
        Ok(paths)
    }

    /// Fetches the exact bytes recorded in the index for `relative_path`.
    pub fn staged_content(&self, relative_path: &str) -> Result<Vec<u8>, StageLintError> {
        let spec = format!(":{relative_path}");
        self.checked(&["show", spec.as_str()])
    }

    /// The directory git runs hooks from, honouring `core.hooksPath`.
    pub fn hooks_dir(&self) -> Result<PathBuf, StageLintError> {
        let stdout = self.checked(&["rev-parse", "--git-path", "hooks"])?;
        let hooks = String::from_utf8_lossy(&stdout);
        Ok(self.root.join(hooks.trim_end_matches(['\n', '\r'])))
    }

    /// Runs git in the repository root and returns stdout, failing on a
    /// non-zero exit status.
    fn checked(&self, args: &[&str]) -> Result<Vec<u8>, StageLintError> {
        let output = run_git(&self.root, args)?;
        if !output.status.success() {
            return Err(StageLintError::Git {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

/// Rejects paths containing characters that are unsafe to pass through a
/// shell invocation.
///
/// # Errors
///
/// Returns [`StageLintError::ForbiddenCharacter`] carrying the offending path.
pub fn validate_path_safety(path: &str) -> Result<(), StageLintError> {
    if path.contains(FORBIDDEN_CHARACTERS) {
        return Err(StageLintError::ForbiddenCharacter(path.to_string()));
    }
    Ok(())
}

fn run_git(dir: &Path, args: &[&str]) -> Result<Output, StageLintError> {
    debug!(?args, dir = %dir.display(), "running git");
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| StageLintError::Other(format!("Failed to run git: {e}")))
}
