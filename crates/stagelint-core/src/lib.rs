pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod lint;
pub mod linters;
pub mod ops;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::StageLintError;
pub use git::GitRepository;
pub use lint::LintOrchestrator;
pub use linters::{Language, LinterPlugin, LinterResult};
