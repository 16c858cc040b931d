//! Running one external lint tool against one file.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::StageLintError;

/// Which output streams count as the tool's diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputCapture {
    /// Only stdout; stderr is captured and discarded.
    #[default]
    Stdout,
    /// Stdout followed by stderr, for tools that report on stderr.
    Merged,
}

/// A program plus its arguments, built by a linter for one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What a finished tool run produced.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Captured diagnostic text, decoded lossily.
    pub text: String,
    /// Exit code, or `None` if the tool was killed by a signal. Logged only;
    /// it does not decide pass or fail.
    pub exit_code: Option<i32>,
}

/// Spawns `command` in `workdir`, waits for it to finish and collects its
/// output according to `capture`.
///
/// # Errors
///
/// Returns [`StageLintError::ToolNotFound`] if the program is not
/// installed, and [`StageLintError::Io`] for any other spawn failure.
pub fn run_tool(
    command: &ToolCommand,
    workdir: &Path,
    capture: OutputCapture,
) -> Result<ToolOutput, StageLintError> {
    debug!(command = %command, workdir = %workdir.display(), "running linter");

    let output = Command::new(&command.program)
        .args(&command.args)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StageLintError::ToolNotFound {
                tool: command.program.clone(),
            },
            _ => StageLintError::Io(e),
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if capture == OutputCapture::Merged {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    let exit_code = output.status.code();
    debug!(command = %command, ?exit_code, bytes = text.len(), "linter finished");
    Ok(ToolOutput { text, exit_code })
}
