//! Markdown linting through `markdownlint`.

use std::path::{Path, PathBuf};

use super::{Language, LinterPlugin, OutputCapture, ToolCommand};

/// Wrapper for `markdownlint`. It reports on stderr, so both streams are
/// captured.
#[derive(Debug, Clone)]
pub struct MarkdownLinter {
    program: String,
    config: Option<PathBuf>,
}

impl MarkdownLinter {
    pub const DEFAULT_PROGRAM: &'static str = "markdownlint";

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

impl Default for MarkdownLinter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinterPlugin for MarkdownLinter {
    fn language(&self) -> Language {
        Language::Markdown
    }

    fn extensions(&self) -> &[&'static str] {
        &[".md"]
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

    fn capture(&self) -> OutputCapture {
        OutputCapture::Merged
    }
}
