//! RAII guard for temporarily switching the process working directory.
//!
//! [`WorkingDirGuard`] records the current directory, changes into a target
//! directory, and changes back when dropped, whether the scope exits normally,
//! through `?`, or by unwinding. The working directory is process-wide, so
//! the guard also holds a process-wide lock: a second guard blocks until the
//! first one is released.
//!
//! # Examples
//!
//! ```no_run
//! use stagelint_core::ops::WorkingDirGuard;
//! use std::path::Path;
//!
//! fn lint_in(dir: &Path) -> Result<(), stagelint_core::StageLintError> {
//!     let _cwd = WorkingDirGuard::enter(dir)?;
//!
//!     // ... spawn tools that resolve paths relative to `dir` ...
//!
//!     Ok(())
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::StageLintError;

static WORKING_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Holds the process working directory inside a target directory for as long
/// as it lives.
pub struct WorkingDirGuard {
    /// Directory to return to on drop.
    original: PathBuf,
    /// Directory entered by [`enter`](WorkingDirGuard::enter).
    current: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDirGuard {
    /// Changes the process working directory to `dir`.
    ///
    /// Blocks while another guard is alive.
    ///
    /// # Errors
    ///
    /// Returns [`StageLintError::Io`] if the current directory cannot be read
    /// or `dir` cannot be entered. The working directory is unchanged in
    /// that case.
    pub fn enter(dir: &Path) -> Result<Self, StageLintError> {
        // A poisoned lock only means an earlier holder panicked; its guard
        // still restored the directory while unwinding.
        let lock = WORKING_DIR_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let original = env::current_dir()?;
        env::set_current_dir(dir)?;
        debug!(from = %original.display(), to = %dir.display(), "entered working directory");

        Ok(Self {
            original,
            current: dir.to_path_buf(),
            _lock: lock,
        })
    }

    /// The directory that will be restored on drop.
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// The directory this guard entered.
    pub fn current(&self) -> &Path {
        &self.current
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        // Best effort: if the original directory vanished there is nothing
        // sensible to fall back to from a destructor.
        let _ = env::set_current_dir(&self.original);
        debug!(to = %self.original.display(), "restored working directory");
    }
}
