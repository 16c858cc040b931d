//! End-to-end lint run over the staged file set.
//!
//! [`LintOrchestrator::run`] gathers staged paths, validates every one of
//! them before touching the disk, snapshots their index content into an
//! [`IsolatedWorkspace`], and runs each registered linter inside that
//! workspace. The returned number is the count of files with problems summed
//! over all linters; deciding what to do with it is up to the caller.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::error::StageLintError;
use crate::git::{validate_path_safety, GitRepository};
use crate::linters::{LintContext, LinterPlugin};
use crate::ops::WorkingDirGuard;
use crate::workspace::IsolatedWorkspace;

/// Phases of a run, in order. Any phase can end the run with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Initialized,
    StagedFilesGathered,
    PathsValidated,
    WorkspaceMaterialized,
    Linting,
    Reported,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunPhase::Initialized => "initialized",
            RunPhase::StagedFilesGathered => "staged files gathered",
            RunPhase::PathsValidated => "paths validated",
            RunPhase::WorkspaceMaterialized => "workspace materialized",
            RunPhase::Linting => "linting",
            RunPhase::Reported => "reported",
        };
        f.write_str(name)
    }
}

pub struct LintOrchestrator {
    repo: GitRepository,
    plugins: Vec<Box<dyn LinterPlugin>>,
    out: Box<dyn Write>,
    phase: RunPhase,
}

impl LintOrchestrator {
    /// Binds a repository and an ordered set of linters. Diagnostics go to
    /// stdout.
    pub fn new(repo: GitRepository, plugins: Vec<Box<dyn LinterPlugin>>) -> Self {
        Self::with_output(repo, plugins, Box::new(io::stdout()))
    }

    /// Like [`new`](Self::new), with diagnostics written to `out`.
    pub fn with_output(
        repo: GitRepository,
        plugins: Vec<Box<dyn LinterPlugin>>,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            repo,
            plugins,
            out,
            phase: RunPhase::Initialized,
        }
    }

    /// The phase the last run reached.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Lints the staged content and returns the number of files with
    /// problems across all linters.
    ///
    /// # Errors
    ///
    /// Fails with [`StageLintError::ForbiddenCharacter`] before any content is
    /// fetched or written if a staged path is unsafe. Git, filesystem and
    /// tool failures abort the run; the workspace is removed and the working
    /// directory restored on every path out.
    pub fn run(&mut self) -> Result<usize, StageLintError> {
        self.phase = RunPhase::Initialized;

        if self.plugins.is_empty() {
            debug!("no linters enabled, nothing to do");
            self.advance(RunPhase::Reported);
            return Ok(0);
        }

        let staged = self.repo.staged_paths()?;
        self.advance(RunPhase::StagedFilesGathered);

        for path in &staged {
            validate_path_safety(path)?;
        }
        self.advance(RunPhase::PathsValidated);

        if staged.is_empty() {
            debug!("nothing staged");
            self.advance(RunPhase::Reported);
            return Ok(0);
        }

        let mut workspace = IsolatedWorkspace::new()?;
        for path in &staged {
            let content = self.repo.staged_content(path)?;
            workspace.materialize(path, &content)?;
        }
        self.advance(RunPhase::WorkspaceMaterialized);

        // Declared after the workspace so it is dropped first: the original
        // directory is restored before the workspace is deleted.
        let cwd = WorkingDirGuard::enter(workspace.root())?;
        self.advance(RunPhase::Linting);

        let mut ctx = LintContext {
            workdir: cwd.current(),
            out: self.out.as_mut(),
            repo_root: Some(self.repo.root()),
        };
        let mut total = 0;
        for plugin in &self.plugins {
            total += plugin.lint(workspace.files(), &mut ctx)?;
        }

        drop(cwd);
        drop(workspace);
        self.advance(RunPhase::Reported);
        debug!(total, "lint run finished");
        Ok(total)
    }

    fn advance(&mut self, phase: RunPhase) {
        debug!(from = %self.phase, to = %phase, "lint run phase");
        self.phase = phase;
    }
}
