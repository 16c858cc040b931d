//! Isolated snapshot of staged files on disk.
//!
//! [`IsolatedWorkspace`] owns a fresh temporary directory and writes each
//! staged file into it under the same relative path it has in the repository,
//! so external tools see the same relative layout (and the same per-directory
//! config lookups) they would see inside the real tree. The directory is
//! removed recursively when the workspace is dropped, on every exit path.

use std::fs;
use std::path::{Component, Path};

use tempfile::TempDir;
use tracing::debug;

use crate::error::StageLintError;

pub struct IsolatedWorkspace {
    dir: TempDir,
    /// Relative paths written during this run, in materialization order.
    files: Vec<String>,
}

impl IsolatedWorkspace {
    /// Creates an empty workspace in the system temporary directory.
    pub fn new() -> Result<Self, StageLintError> {
        let dir = tempfile::Builder::new().prefix("stagelint-").tempdir()?;
        debug!(root = %dir.path().display(), "created isolated workspace");
        Ok(Self {
            dir,
            files: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` verbatim to `root/relative_path`, creating parent
    /// directories as needed, and records the path as available for linting.
    ///
    /// # Errors
    ///
    /// Returns [`StageLintError::UnsafePath`] if `relative_path` is absolute
    /// or would resolve outside the workspace, and [`StageLintError::Io`] if
    /// the file cannot be written.
    pub fn materialize(&mut self, relative_path: &str, content: &[u8]) -> Result<(), StageLintError> {
        let rel = Path::new(relative_path);
        let well_formed = !relative_path.is_empty()
            && rel.components().all(|c| matches!(c, Component::Normal(_)));
        if !well_formed {
            return Err(StageLintError::UnsafePath(relative_path.to_string()));
        }

        let target = self.dir.path().join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;

        self.files.push(relative_path.to_string());
        Ok(())
    }

    /// The relative paths written in this run. Never a directory walk, so
    /// anything else sitting in the workspace (such as a copied linter
    /// config) is not linted.
    pub fn files(&self) -> &[String] {
        &self.files
    }
}
