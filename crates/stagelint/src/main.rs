mod cli;
mod commands;
mod output;

use std::io;

use clap::{CommandFactory, Parser};
use cli::{Cli, ColorMode, Commands};
use output::{OutputMode, Reporter};
use stagelint_core::Language;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging. Only debug output exists below `warn`, so a hook
    // run writes nothing to stderr unless asked to.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };

    match cli.color {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Auto => {}
    }

    let mut reporter = Reporter::new(mode);

    let success = match cli.command {
        Commands::Run { repo, config } => {
            commands::run::run_lint(repo.as_deref(), config.as_deref(), &mut reporter)
        }
        Commands::Install {
            repositories,
            markdown,
            python,
            r,
        } => {
            let languages: Vec<Language> = [
                (markdown, Language::Markdown),
                (python, Language::Python),
                (r, Language::R),
            ]
            .into_iter()
            .filter_map(|(selected, language)| selected.then_some(language))
            .collect();
            commands::install::run_install(&repositories, &languages, &mut reporter)
        }
        Commands::Uninstall { repositories } => {
            commands::uninstall::run_uninstall(&repositories, &mut reporter)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "stagelint", &mut io::stdout());
            true
        }
    };

    if !success {
        std::process::exit(1);
    }
}
