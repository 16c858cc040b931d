//! Git hook installation for the staged-content linter.
//!
//! Writes a native `pre-commit` hook that runs `stagelint run`, plus the
//! per-repository linter selection the hook reads.

pub mod install;

pub use install::{config_path, install_hook, uninstall_hook, Installation, Removal};
