use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "stagelint",
    version,
    about = "Git pre-commit hook that lints exactly what is staged"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Color mode
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint the files staged for commit (what the pre-commit hook runs)
    Run {
        /// Repository to lint (defaults to the current directory)
        #[arg(long)]
        repo: Option<PathBuf>,

        /// Hook config file (defaults to stagelint.json in the hooks directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Install the pre-commit hook. Enables every linter unless some are selected
    Install {
        /// Target git repositories
        #[arg(required = true)]
        repositories: Vec<PathBuf>,

        /// Enable the Markdown linter
        #[arg(short = 'm', long)]
        markdown: bool,

        /// Enable the Python linter
        #[arg(short = 'p', long)]
        python: bool,

        /// Enable the R linter
        #[arg(short = 'r', long)]
        r: bool,
    },

    /// Remove the pre-commit hook
    Uninstall {
        /// Target git repositories
        #[arg(required = true)]
        repositories: Vec<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
