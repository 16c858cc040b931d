//! Installing and removing the stagelint `pre-commit` hook.
//!
//! The hook is a native git hook script in the repository's hooks directory
//! (`git rev-parse --git-path hooks`, so `core.hooksPath` is honoured). The
//! set of enabled linters is written next to it as `stagelint.json`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{HookConfig, CONFIG_FILE_NAME};
use crate::error::StageLintError;
use crate::git::GitRepository;
use crate::linters::Language;

/// Name of the hook git runs before recording a commit.
pub const HOOK_NAME: &str = "pre-commit";

/// Marker line identifying a hook written by stagelint.
const HOOK_MARKER: &str = "# installed by stagelint";

/// The hook body. A non-zero exit from `stagelint run` rejects the commit.
const HOOK_SCRIPT: &str = "#!/bin/sh\n# installed by stagelint\nexec stagelint run\n";

/// Where an installation put its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    pub hook_path: PathBuf,
    pub config_path: PathBuf,
    /// Whether a hook already existed and was overwritten.
    pub replaced: bool,
}

/// What an uninstall did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Removed(PathBuf),
    NotInstalled,
    /// A `pre-commit` hook exists but was not written by stagelint.
    ForeignHook(PathBuf),
}

/// Path of the hook config for the repository, whether or not it exists.
pub fn config_path(repo: &GitRepository) -> Result<PathBuf, StageLintError> {
    Ok(repo.hooks_dir()?.join(CONFIG_FILE_NAME))
}

/// Installs the hook into the repository containing `target`, enabling the
/// given linters. An empty `languages` slice enables all of them.
///
/// An existing `pre-commit` hook is overwritten.
pub fn install_hook(target: &Path, languages: &[Language]) -> Result<Installation, StageLintError> {
    let repo = GitRepository::open(target)?;
    let hooks_dir = repo.hooks_dir()?;
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join(HOOK_NAME);
    let replaced = hook_path.exists();
    fs::write(&hook_path, HOOK_SCRIPT)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    let enabled = if languages.is_empty() {
        &Language::ALL[..]
    } else {
        languages
    };
    let config_path = hooks_dir.join(CONFIG_FILE_NAME);
    HookConfig::with_enabled(enabled).save(&config_path)?;

    debug!(hook = %hook_path.display(), replaced, "installed pre-commit hook");
    Ok(Installation {
        hook_path,
        config_path,
        replaced,
    })
}

/// Removes the stagelint hook and its config from the repository containing
/// `target`. A hook not written by stagelint is left in place.
pub fn uninstall_hook(target: &Path) -> Result<Removal, StageLintError> {
    let repo = GitRepository::open(target)?;
    let hooks_dir = repo.hooks_dir()?;
    let hook_path = hooks_dir.join(HOOK_NAME);
    let config_path = hooks_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        fs::remove_file(&config_path)?;
    }

    if !hook_path.exists() {
        return Ok(Removal::NotInstalled);
    }

    let existing = fs::read(&hook_path)?;
    if !String::from_utf8_lossy(&existing).contains(HOOK_MARKER) {
        return Ok(Removal::ForeignHook(hook_path));
    }

    fs::remove_file(&hook_path)?;
    debug!(hook = %hook_path.display(), "removed pre-commit hook");
    Ok(Removal::Removed(hook_path))
}
