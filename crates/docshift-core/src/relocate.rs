//! Relocation engine
//!
//! Copies the root doc into the docs index and moves every other eligible
//! file into the docs directory, mirroring its path relative to the root.
//! Per-file failures are recorded and the batch carries on.

mod actions;
mod executor;
mod orchestrator;
mod reporting;

use std::collections::BTreeMap;

pub use actions::{RelocationAction, RelocationActionResolver};
pub use executor::{FileOperationExecutor, copy_file_with_metadata, move_file};
pub use orchestrator::RelocationEngine;
pub use reporting::RelocationReporter;

use crate::scanner::SkipReason;

/// Relocation result with statistics
#[derive(Debug, Clone, Default)]
pub struct RelocationResult {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Files copied (the root doc)
    pub copied: usize,
    /// Files moved
    pub moved: usize,
    /// Files left in place by an exclusion rule
    pub skipped: usize,
    /// Skip reasons with counts
    pub skip_reasons: BTreeMap<SkipReason, usize>,
    /// Non-fatal warnings
    pub warnings: Vec<String>,
    /// Per-file failures
    pub errors: Vec<String>,
}

impl RelocationResult {
    /// Total operations performed
    #[must_use]
    pub const fn total_operations(&self) -> usize {
        self.copied + self.moved
    }

    /// Whether the run had no per-file failures
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
