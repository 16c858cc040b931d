//! CLI handler for `stagelint run`, the entry point of the pre-commit hook.

use std::env;
use std::path::Path;

use stagelint_core::config::HookConfig;
use stagelint_core::hooks;
use stagelint_core::linters::build_plugins;
use stagelint_core::{GitRepository, LintOrchestrator};

use crate::output::Reporter;

/// Lint the staged files of the repository at `repo` (or the current
/// directory).
///
/// Returns `true` if no staged file has problems. Linter diagnostics are
/// printed to stdout as the run goes.
pub fn run_lint(repo: Option<&Path>, config: Option<&Path>, reporter: &mut Reporter) -> bool {
    let start = match repo {
        Some(path) => path.to_path_buf(),
        None => match env::current_dir() {
            Ok(c) => c,
            Err(e) => {
                reporter.error(&format!("Cannot get current directory: {e}"));
                return false;
            }
        },
    };

    let repository = match GitRepository::open(&start) {
        Ok(r) => r,
        Err(e) => {
            reporter.error(&format!("{e}"));
            return false;
        }
    };

    let config_path = match config {
        Some(path) => path.to_path_buf(),
        None => match hooks::config_path(&repository) {
            Ok(p) => p,
            Err(e) => {
                reporter.error(&format!("Cannot locate hook config: {e}"));
                return false;
            }
        },
    };

    let hook_config = match HookConfig::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            reporter.error(&format!(
                "Failed to load {}: {e}",
                config_path.display()
            ));
            return false;
        }
    };

    let plugins = match build_plugins(&hook_config, repository.root()) {
        Ok(p) => p,
        Err(e) => {
            reporter.error(&format!("{e}"));
            return false;
        }
    };

    let mut orchestrator = LintOrchestrator::new(repository, plugins);
    match orchestrator.run() {
        Ok(0) => {
            reporter.success("No linting problems in staged files");
            true
        }
        Ok(count) => {
            let noun = if count == 1 { "file has" } else { "files have" };
            reporter.error(&format!(
                "{count} staged {noun} linting problems. Fix them or commit with --no-verify."
            ));
            false
        }
        Err(e) => {
            reporter.error(&format!("{e}"));
            false
        }
    }
}
