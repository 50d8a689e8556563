//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! - **Arrays** (`exclude_dirs`): additive, values from all configs are combined
//! - **Scalars** (`docs_dir`, `root_doc`, `index_name`, `extension`): the
//!   highest-precedence config that sets a value wins

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge discovered config files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. `.docshift.toml` in the repository root
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = Config::default();

        // Lowest precedence first
        for path in [&files.project, &files.cli].into_iter().flatten() {
            let layer = Self::load(path)?;
            Self::merge_into(&mut merged, layer);
        }

        Ok(merged)
    }

    /// Read and parse a single config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Merge a config layer on top of `base`
    pub fn merge_into(base: &mut Config, layer: Config) {
        for dir in layer.exclude_dirs {
            if !base.exclude_dirs.contains(&dir) {
                base.exclude_dirs.push(dir);
            }
        }

        if layer.docs_dir.is_some() {
            base.docs_dir = layer.docs_dir;
        }
        if layer.root_doc.is_some() {
            base.root_doc = layer.root_doc;
        }
        if layer.index_name.is_some() {
            base.index_name = layer.index_name;
        }
        if layer.extension.is_some() {
            base.extension = layer.extension;
        }
    }
}
