//! Markdown discovery for a repository tree
//!
//! The scanner walks the root recursively, in lexicographic file-name order
//! per directory, and classifies every file with the target extension:
//! either it is a candidate for relocation or it is skipped by one of the
//! [`ExclusionRules`]. Excluded directories are pruned from the walk.
//!
//! A symlink to a regular file is a candidate like the file itself; the link
//! is relocated, not its target. Unreadable directories become warnings and
//! the walk continues with their siblings.

mod filters;


use std::fs;
use std::path::PathBuf;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

pub use filters::{ExclusionRules, ReservedFile, SkipReason};

use crate::config::Layout;

/// A file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Set when an exclusion rule applies
    pub skip: Option<SkipReason>,
}

/// Result of a scan with optional warnings
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Files with the target extension, in traversal order
    pub files: Vec<ScannedFile>,
    /// Non-fatal problems hit while walking (unreadable directories, ...)
    pub warnings: Vec<String>,
}

/// Walks a layout's root directory
pub struct Scanner<'a> {
    layout: &'a Layout,
    rules: ExclusionRules,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for `layout`
    #[must_use]
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            rules: ExclusionRules::from_layout(layout),
        }
    }

    /// Scan the root for files with the target extension
    #[must_use]
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();
        let extension = self.layout.extension.as_str();

        let walker = WalkDir::new(&self.layout.root_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let keep = !(entry.file_type().is_dir() && self.rules.is_excluded_dir(entry.path()));
                if !keep {
                    debug!(dir = %entry.path().display(), "Skipping excluded directory");
                }
                keep
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    result.warnings.push(format!("Failed to read directory entry: {e}"));
                    continue;
                }
            };

            let path = entry.path();
            if !is_file_or_file_link(&entry) {
                continue;
            }

            if path.extension().is_none_or(|ext| ext != extension) {
                continue;
            }

            result.files.push(ScannedFile {
                path: path.to_path_buf(),
                skip: self.rules.check(path),
            });
        }

        result
    }
}

/// Regular files, and symlinks whose target is a regular file
///
/// Links are not followed during the walk, so a link to a directory is never
/// descended into and a dangling link is never a candidate.
fn is_file_or_file_link(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file()
        || (file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_file()))
}
