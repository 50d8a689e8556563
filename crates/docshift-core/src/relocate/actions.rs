//! Relocation action determination logic

use std::path::PathBuf;

use anyhow::Context;

use crate::config::Layout;
use crate::error::Result;
use crate::scanner::{ScannedFile, SkipReason};

/// Relocation action to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationAction {
    /// Copy the root doc to the docs index, keeping the source
    CopyRootDoc {
        /// Root documentation file
        source: PathBuf,
        /// Docs index file
        dest: PathBuf,
    },
    /// Move a file to its mirrored location under the docs directory
    Move {
        /// Current location
        source: PathBuf,
        /// Mirrored location
        dest: PathBuf,
    },
    /// Leave this file in place
    Skip {
        /// File path being skipped
        path: PathBuf,
        /// Rule that matched
        reason: SkipReason,
    },
}

/// Resolves scanned files into relocation actions
pub struct RelocationActionResolver;

impl RelocationActionResolver {
    /// Determine the action for a scanned file
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not lie under the layout's root.
    pub fn resolve(file: &ScannedFile, layout: &Layout) -> Result<RelocationAction> {
        if let Some(reason) = file.skip {
            return Ok(RelocationAction::Skip {
                path: file.path.clone(),
                reason,
            });
        }

        let dest = layout.destination_for(&file.path).with_context(|| {
            format!(
                "{} is outside the root directory {}",
                file.path.display(),
                layout.root_dir.display()
            )
        })?;

        Ok(RelocationAction::Move {
            source: file.path.clone(),
            dest,
        })
    }

    /// The copy action for the layout's root doc
    #[must_use]
    pub fn root_doc(layout: &Layout) -> RelocationAction {
        RelocationAction::CopyRootDoc {
            source: layout.root_doc.clone(),
            dest: layout.docs_index.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_move_mirrors_path() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::resolve(tmp.path(), &Config::default()).unwrap();
        let file = ScannedFile {
            path: layout.root_dir.join("guide/intro.md"),
            skip: None,
        };

        let action = RelocationActionResolver::resolve(&file, &layout).unwrap();
        assert_eq!(
            action,
            RelocationAction::Move {
                source: layout.root_dir.join("guide/intro.md"),
                dest: layout.docs_dir.join("guide/intro.md"),
            }
        );
    }

    #[test]
    fn test_resolve_skip() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::resolve(tmp.path(), &Config::default()).unwrap();
        let file = ScannedFile {
            path: layout.root_doc.clone(),
            skip: Some(SkipReason::RootDoc),
        };

        let action = RelocationActionResolver::resolve(&file, &layout).unwrap();
        assert!(matches!(
            action,
            RelocationAction::Skip {
                reason: SkipReason::RootDoc,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_outside_root_fails() {
        let tmp = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let layout = Layout::resolve(tmp.path(), &Config::default()).unwrap();
        let file = ScannedFile {
            path: other.path().join("stray.md"),
            skip: None,
        };

        assert!(RelocationActionResolver::resolve(&file, &layout).is_err());
    }

    #[test]
    fn test_root_doc_action() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::resolve(tmp.path(), &Config::default()).unwrap();

        assert_eq!(
            RelocationActionResolver::root_doc(&layout),
            RelocationAction::CopyRootDoc {
                source: layout.root_dir.join("README.md"),
                dest: layout.docs_dir.join("index.md"),
            }
        );
    }
}
