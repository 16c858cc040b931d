//! CLI handler for `stagelint install`.

use std::path::PathBuf;

use stagelint_core::hooks::install_hook;
use stagelint_core::Language;

use crate::output::Reporter;

/// Install the hook in every repository in `repositories`.
///
/// A repository that cannot be installed into is reported and skipped.
/// Returns `true` only if every installation succeeded.
pub fn run_install(repositories: &[PathBuf], languages: &[Language], reporter: &mut Reporter) -> bool {
    let mut installed = Vec::new();
    let mut all_ok = true;

    for repo in repositories {
        match install_hook(repo, languages) {
            Ok(installation) => {
                if installation.replaced {
                    reporter.warning(&format!(
                        "Replaced existing hook {}",
                        installation.hook_path.display()
                    ));
                }
                reporter.info(&format!("Wrote {}", installation.config_path.display()));
                installed.push(repo.display().to_string());
            }
            Err(e) => {
                reporter.error(&format!(
                    "Aborting installation on {}: {e}",
                    repo.display()
                ));
                all_ok = false;
            }
        }
    }

    if !installed.is_empty() {
        installed.sort();
        reporter.section("Installed");
        let enabled: Vec<&str> = if languages.is_empty() {
            Language::ALL.iter().map(|l| l.name()).collect()
        } else {
            languages.iter().map(|l| l.name()).collect()
        };
        reporter.success(&format!(
            "pre-commit hook installed ({}) in:\n  {}",
            enabled.join(", "),
            installed.join("\n  ")
        ));
    }

    all_ok
}
