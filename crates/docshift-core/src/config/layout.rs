//! Effective on-disk layout for one run

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::Config;
use crate::error::{LayoutError, Result};

/// Absolute paths the relocator works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Root of the scanned tree
    pub root_dir: PathBuf,
    /// Destination directory for relocated files
    pub docs_dir: PathBuf,
    /// Root documentation file (copied, never moved)
    pub root_doc: PathBuf,
    /// Where the root doc is copied to
    pub docs_index: PathBuf,
    /// Directories whose contents are never relocated; always includes `docs_dir`
    pub excluded_dirs: Vec<PathBuf>,
    /// Extension of candidate files, without the leading dot
    pub extension: String,
}

impl Layout {
    /// Resolve the layout for `root_dir` using `config`
    ///
    /// The root is canonicalized so that every derived path is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the root does not exist or is not a
    /// directory, or if the root doc resolves to the docs index.
    pub fn resolve(root_dir: &Path, config: &Config) -> Result<Self> {
        if !root_dir.exists() {
            return Err(LayoutError::RootNotFound(root_dir.to_path_buf()).into());
        }
        if !root_dir.is_dir() {
            return Err(LayoutError::RootNotDirectory(root_dir.to_path_buf()).into());
        }

        let root_dir = dunce::canonicalize(root_dir).with_context(|| {
            format!("Failed to canonicalize root directory: {}", root_dir.display())
        })?;

        let docs_dir = root_dir.join(config.docs_dir());
        let root_doc = root_dir.join(config.root_doc());
        let docs_index = docs_dir.join(config.index_name());
        if root_doc == docs_index {
            return Err(LayoutError::RootDocIsIndex(root_doc).into());
        }

        let mut excluded_dirs: Vec<PathBuf> = Vec::with_capacity(config.exclude_dirs.len() + 1);
        for name in &config.exclude_dirs {
            let dir = root_dir.join(name);
            if !excluded_dirs.contains(&dir) {
                excluded_dirs.push(dir);
            }
        }
        if !excluded_dirs.contains(&docs_dir) {
            excluded_dirs.push(docs_dir.clone());
        }

        Ok(Self {
            root_dir,
            docs_dir,
            root_doc,
            docs_index,
            excluded_dirs,
            extension: config.extension().to_string(),
        })
    }

    /// Mirror `source` under the docs directory
    ///
    /// Returns `None` if `source` is not under the root directory.
    #[must_use]
    pub fn destination_for(&self, source: &Path) -> Option<PathBuf> {
        source
            .strip_prefix(&self.root_dir)
            .ok()
            .map(|rel| self.docs_dir.join(rel))
    }
}
