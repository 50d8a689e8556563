//! Relocation orchestration - coordinates the copy and move passes

use anyhow::Context;
use tracing::{error, info, warn};

use super::RelocationResult;
use super::actions::{RelocationAction, RelocationActionResolver};
use super::executor::FileOperationExecutor;
use crate::config::Layout;
use crate::error::Result;
use crate::scanner::Scanner;

/// Main relocation engine
pub struct RelocationEngine {
    layout: Layout,
    executor: FileOperationExecutor,
    dry_run: bool,
}

impl RelocationEngine {
    /// Create a new engine for a resolved layout
    #[must_use]
    pub const fn new(layout: Layout, dry_run: bool) -> Self {
        Self {
            layout,
            executor: FileOperationExecutor::new(dry_run),
            dry_run,
        }
    }

    /// The layout this engine works on
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Run the full pass: ensure the docs directory, copy the root doc,
    /// then relocate every eligible file
    ///
    /// # Errors
    ///
    /// Returns an error only if the docs directory cannot be created.
    /// Per-file failures are recorded in the returned result.
    pub fn run(&self) -> Result<RelocationResult> {
        let mut result = RelocationResult {
            dry_run: self.dry_run,
            ..RelocationResult::default()
        };

        info!("Root directory: {}", self.layout.root_dir.display());
        info!(
            "Excluded directories: {:?}",
            self.layout
                .excluded_dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>()
        );
        info!("Dry run mode: {}", self.dry_run);

        self.executor
            .ensure_dir(&self.layout.docs_dir)
            .context("Failed to prepare docs directory")?;

        self.copy_root_doc(&mut result);
        self.relocate_markdown_files(&mut result);

        Ok(result)
    }

    /// Copy the root doc to the docs index
    ///
    /// A missing root doc is a warning, not an error.
    pub fn copy_root_doc(&self, result: &mut RelocationResult) {
        if !self.layout.root_doc.is_file() {
            let warning = format!(
                "Root doc not found at {}. Skipping copy to {}.",
                self.layout.root_doc.display(),
                self.layout.docs_index.display()
            );
            warn!("{warning}");
            result.warnings.push(warning);
            return;
        }

        self.apply(&RelocationActionResolver::root_doc(&self.layout), result);
    }

    /// Move every eligible file to its mirrored location under the docs directory
    pub fn relocate_markdown_files(&self, result: &mut RelocationResult) {
        let scan_result = Scanner::new(&self.layout).scan();

        for warning in scan_result.warnings {
            warn!("{warning}");
            result.warnings.push(warning);
        }

        for file in &scan_result.files {
            match RelocationActionResolver::resolve(file, &self.layout) {
                Ok(action) => self.apply(&action, result),
                Err(e) => {
                    error!("{e:#}");
                    result.errors.push(format!("{e:#}"));
                }
            }
        }
    }

    /// Execute one action, recording a failure instead of returning it
    fn apply(&self, action: &RelocationAction, result: &mut RelocationResult) {
        if let Err(e) = self.executor.execute(action, result) {
            let e = anyhow::Error::new(e);
            error!("{e:#}");
            result.errors.push(format!("{e:#}"));
        }
    }
}
