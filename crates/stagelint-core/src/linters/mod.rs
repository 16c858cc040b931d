//! Pluggable per-language linters.
//!
//! A [`LinterPlugin`] selects files by extension, builds the external command
//! for one file, and interprets what the tool printed. The provided
//! [`LinterPlugin::lint`] drives that loop; variants only describe their
//! tool. New languages are added by implementing the trait and registering
//! the plugin in [`registry::build_plugins`].
//!
//! Pass/fail is decided by output alone: silence means clean, any output
//! means the file has at least one problem. Exit codes are not trusted since
//! lintr exits 0 even when it reports findings.

pub mod markdown;
pub mod python;
pub mod r;
pub mod registry;
pub mod tool;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StageLintError;

pub use markdown::MarkdownLinter;
pub use python::PythonLinter;
pub use r::RLinter;
pub use registry::build_plugins;
pub use tool::{run_tool, OutputCapture, ToolCommand, ToolOutput};

/// Languages with a built-in linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Markdown via `markdownlint`
    Markdown,
    /// Python via `flake8`
    Python,
    /// R via `lintr`, run through `Rscript`
    R,
}

impl Language {
    /// All languages, in registration order.
    pub const ALL: [Language; 3] = [Language::Markdown, Language::Python, Language::R];

    /// Returns the lowercase name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Markdown => "markdown",
            Language::Python => "python",
            Language::R => "r",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of linting one file with one linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinterResult {
    pub path: String,
    pub output: String,
    pub has_problems: bool,
}

impl LinterResult {
    pub fn new(path: impl Into<String>, output: impl Into<String>) -> Self {
        let output = output.into();
        Self {
            path: path.into(),
            has_problems: !output.is_empty(),
            output,
        }
    }
}

/// Where a lint pass runs and where its diagnostics go.
pub struct LintContext<'a> {
    /// Directory the tools run in; file paths are relative to it.
    pub workdir: &'a Path,
    /// Sink for raw tool diagnostics.
    pub out: &'a mut dyn Write,
    /// Repository the workdir is a snapshot of, if any.
    pub repo_root: Option<&'a Path>,
}

impl LintContext<'_> {
    /// Where a tool should read `config` from.
    ///
    /// A config file that lives in the repository and is itself among the
    /// snapshot's `files` is read from the workdir, so the staged version
    /// wins over the working tree.
    pub fn staged_config(&self, config: &Path, files: &[String]) -> PathBuf {
        let staged = self
            .repo_root
            .and_then(|root| config.strip_prefix(root).ok())
            .filter(|rel| files.iter().any(|f| Path::new(f) == *rel));
        match staged {
            Some(rel) => self.workdir.join(rel),
            None => config.to_path_buf(),
        }
    }

    /// Writes tool output verbatim, terminated by a newline.
    pub fn report(&mut self, output: &str) -> Result<(), StageLintError> {
        self.out.write_all(output.as_bytes())?;
        if !output.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

pub trait LinterPlugin {
    fn language(&self) -> Language;

    /// Filename suffixes this linter claims, e.g. `[".r", ".R"]`.
    fn extensions(&self) -> &[&'static str];

    /// Local configuration file, or `None` to use the tool's defaults.
    fn config_path(&self) -> Option<&Path>;

    /// Builds the command that lints `file` (relative to the workdir) with
    /// the given tool config.
    fn command(&self, file: &str, config: Option<&Path>) -> ToolCommand;

    fn capture(&self) -> OutputCapture {
        OutputCapture::Stdout
    }

    /// Hook to set up the workdir before the first file is linted.
    fn prepare(&self, _workdir: &Path, _config: Option<&Path>) -> Result<(), StageLintError> {
        Ok(())
    }

    fn interpret(&self, file: &str, output: ToolOutput) -> LinterResult {
        LinterResult::new(file, output.text)
    }

    fn matches(&self, path: &str) -> bool {
        self.extensions().iter().any(|ext| path.ends_with(ext))
    }

    /// Lints every file in `files` that this linter claims, in sorted order,
    /// writing non-empty diagnostics to `ctx.out`.
    ///
    /// Returns the number of files with problems; 0 if none match.
    fn lint(&self, files: &[String], ctx: &mut LintContext<'_>) -> Result<usize, StageLintError> {
        let mut relevant: Vec<&str> = files
            .iter()
            .map(String::as_str)
            .filter(|f| self.matches(f))
            .collect();
        if relevant.is_empty() {
            return Ok(0);
        }
        relevant.sort_unstable();

        let config = self.config_path().map(|c| ctx.staged_config(c, files));
        self.prepare(ctx.workdir, config.as_deref())?;

        let mut problems = 0;
        for file in relevant {
            let command = self.command(file, config.as_deref());
            let output = run_tool(&command, ctx.workdir, self.capture())?;
            let result = self.interpret(file, output);
            if result.has_problems {
                ctx.report(&result.output)?;
                problems += 1;
            }
        }

        tracing::debug!(linter = %self.language(), problems, "linter pass finished");
        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_flags_any_output_as_problem() {
        assert!(LinterResult::new("a.md", "a.md:1 MD022").has_problems);
        assert!(LinterResult::new("a.md", "\n").has_problems);
        assert!(!LinterResult::new("a.md", "").has_problems);
    }

    #[test]
    fn report_adds_missing_newline_only() {
        let mut buf = Vec::new();
        let mut ctx = LintContext {
            workdir: Path::new("."),
            out: &mut buf,
            repo_root: None,
        };
        ctx.report("first\n").unwrap();
        ctx.report("second").unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn staged_config_prefers_the_snapshot_copy() {
        let mut buf = Vec::new();
        let ctx = LintContext {
            workdir: Path::new("/ws"),
            out: &mut buf,
            repo_root: Some(Path::new("/repo")),
        };
        let files = vec![".lintr".to_string(), "lint/md.json".to_string()];

        assert_eq!(
            ctx.staged_config(Path::new("/repo/.lintr"), &files),
            PathBuf::from("/ws/.lintr")
        );
        assert_eq!(
            ctx.staged_config(Path::new("/repo/lint/md.json"), &files),
            PathBuf::from("/ws/lint/md.json")
        );
        assert_eq!(
            ctx.staged_config(Path::new("/repo/.flake8"), &files),
            PathBuf::from("/repo/.flake8")
        );
        assert_eq!(
            ctx.staged_config(Path::new("/elsewhere/.lintr"), &files),
            PathBuf::from("/elsewhere/.lintr")
        );
    }

    #[test]
    fn staged_config_without_repository_is_unchanged() {
        let mut buf = Vec::new();
        let ctx = LintContext {
            workdir: Path::new("/ws"),
            out: &mut buf,
            repo_root: None,
        };
        let files = vec![".lintr".to_string()];
        assert_eq!(
            ctx.staged_config(Path::new("/repo/.lintr"), &files),
            PathBuf::from("/repo/.lintr")
        );
    }

    #[test]
    fn language_names() {
        assert_eq!(Language::Markdown.name(), "markdown");
        assert_eq!(Language::Python.name(), "python");
        assert_eq!(Language::R.to_string(), "r");
    }
}
