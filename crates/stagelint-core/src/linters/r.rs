//! R linting through `lintr`, run with `Rscript`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Language, LinterPlugin, ToolCommand};
use crate::error::StageLintError;

/// File name lintr reads its settings from.
pub const LINTR_CONFIG_NAME: &str = ".lintr";

/// Wrapper for `lintr::lint()`.
///
/// lintr has no flag for a config path and only finds `.lintr` relative to
/// the directory it runs in, so a configured file is copied into the workdir
/// under that name before the first file is linted. A staged `.lintr` is
/// already in place and is left untouched. lintr also exits 0 when it finds
/// problems; only its output tells.
#[derive(Debug, Clone)]
pub struct RLinter {
    program: String,
    config: Option<PathBuf>,
}

impl RLinter {
    pub const DEFAULT_PROGRAM: &'static str = "Rscript";

    pub fn new() -> Self {
        Self {
            program: Self::DEFAULT_PROGRAM.to_string(),
            config: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }
}

impl Default for RLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinterPlugin for RLinter {
    fn language(&self) -> Language {
        Language::R
    }

    fn extensions(&self) -> &[&'static str] {
        &[".r", ".R"]
    }

    fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    fn command(&self, file: &str, _config: Option<&Path>) -> ToolCommand {
        ToolCommand::new(&self.program)
            .arg("--slave")
            .arg("--vanilla")
            .arg("-e")
            .arg(format!("lintr::lint('{file}')"))
    }

    fn prepare(&self, workdir: &Path, config: Option<&Path>) -> Result<(), StageLintError> {
        if let Some(config) = config {
            let target = workdir.join(LINTR_CONFIG_NAME);
            if config == target {
                debug!(config = %target.display(), "using staged lintr config");
                return Ok(());
            }
            fs::copy(config, &target)?;
            debug!(from = %config.display(), to = %target.display(), "copied lintr config");
        }
        Ok(())
    }
}
