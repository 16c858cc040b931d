use colored::*;

/// Output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Quiet,
}

/// Reporter handles the CLI's own messages. Linter diagnostics are written
/// to stdout by the lint run itself and never pass through here.
pub struct Reporter {
    mode: OutputMode,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    pub fn error(&mut self, message: &str) {
        eprintln!("{} {}", "ERROR:".red(), message);
    }

    pub fn warning(&mut self, message: &str) {
        if self.mode == OutputMode::Human {
            eprintln!("{} {}", "WARNING:".yellow(), message);
        }
    }

    pub fn success(&mut self, message: &str) {
        if self.mode == OutputMode::Human {
            println!("{} {}", "✓".green(), message);
        }
    }

    pub fn info(&mut self, message: &str) {
        if self.mode == OutputMode::Human {
            println!("{} {}", "INFO:".blue(), message);
        }
    }

    pub fn section(&mut self, title: &str) {
        if self.mode == OutputMode::Human {
            println!("{}", format!("=== {title} ===").cyan());
        }
    }
}
