//! CLI handler for `stagelint uninstall`.

use std::path::PathBuf;

use stagelint_core::hooks::{uninstall_hook, Removal};

use crate::output::Reporter;

pub fn run_uninstall(repositories: &[PathBuf], reporter: &mut Reporter) -> bool {
    let mut all_ok = true;

    for repo in repositories {
        match uninstall_hook(repo) {
            Ok(Removal::Removed(path)) => {
                reporter.success(&format!("Removed {}", path.display()));
            }
            Ok(Removal::NotInstalled) => {
                reporter.info(&format!("No stagelint hook in {}", repo.display()));
            }
            Ok(Removal::ForeignHook(path)) => {
                reporter.warning(&format!(
                    "{} was not installed by stagelint; left in place",
                    path.display()
                ));
            }
            Err(e) => {
                reporter.error(&format!("Cannot uninstall from {}: {e}", repo.display()));
                all_ok = false;
            }
        }
    }

    all_ok
}
