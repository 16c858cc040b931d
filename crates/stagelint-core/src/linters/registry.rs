//! Explicit registration of the built-in linters.

use std::path::Path;

use tracing::debug;

use super::{Language, LinterPlugin, MarkdownLinter, PythonLinter, RLinter};
use crate::config::{resolve_tool_config, HookConfig};
use crate::error::StageLintError;

/// Builds the enabled linters in registration order (Markdown, Python, R),
/// resolving each tool's config against `repo_root`.
pub fn build_plugins(
    config: &HookConfig,
    repo_root: &Path,
) -> Result<Vec<Box<dyn LinterPlugin>>, StageLintError> {
    let mut plugins: Vec<Box<dyn LinterPlugin>> = Vec::new();

    for language in config.enabled() {
        let settings = config.settings(language);
        let tool_config = resolve_tool_config(settings, language, repo_root)?;
        debug!(%language, config = ?tool_config, "registering linter");

        let plugin: Box<dyn LinterPlugin> = match language {
            Language::Markdown => {
                let mut linter = MarkdownLinter::new().with_config(tool_config);
                if let Some(program) = &settings.program {
                    linter = linter.with_program(program);
                }
                Box::new(linter)
            }
            Language::Python => {
                let mut linter = PythonLinter::new().with_config(tool_config);
                if let Some(program) = &settings.program {
                    linter = linter.with_program(program);
                }
                Box::new(linter)
            }
            Language::R => {
                let mut linter = RLinter::new().with_config(tool_config);
                if let Some(program) = &settings.program {
                    linter = linter.with_program(program);
                }
                Box::new(linter)
            }
        };
        plugins.push(plugin);
    }

    Ok(plugins)
}
