//! Scoped process-state operations.
//!
//! This module provides RAII guards for process-wide state that a lint run
//! borrows temporarily. If a run fails partway through, the guard's `Drop`
//! implementation puts the state back.

pub mod workdir;

pub use workdir::WorkingDirGuard;
