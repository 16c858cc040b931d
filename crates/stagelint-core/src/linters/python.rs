//! Python linting through `flake8`.

use std::path::{Path, PathBuf};

use super::{Language, LinterPlugin, ToolCommand};

#[derive(Debug, Clone)]
pub struct PythonLinter {
    program: String,
    config: Option<PathBuf>,
}

impl PythonLinter {
    pub const DEFAULT_PROGRAM: &'static str = "flake8";

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

impl Default for PythonLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinterPlugin for PythonLinter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extensions(&self) -> &[&'static str] {
        &[".py"]
    }

    fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    fn command(&self, file: &str, config: Option<&Path>) -> ToolCommand {
        let cmd = ToolCommand::new(&self.program).arg(file);
        match config {
            Some(config) => cmd.arg("--config").arg(config),
            None => cmd,
        }
    }
}
