//! Configuration file parsing, merging, and layout resolution
//!
//! This module handles:
//! - Config file discovery (project root, CLI-specified)
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Validation and error reporting
//! - Resolving the effective on-disk [`Layout`] for a repository root

mod discovery;
mod layout;
mod merge;
mod types;
mod validation;


use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use layout::Layout;
pub use merge::ConfigMerger;
pub use types::{
    Config, DEFAULT_DOCS_DIR, DEFAULT_EXTENSION, DEFAULT_INDEX_NAME, DEFAULT_ROOT_DOC,
};
pub use validation::ConfigValidator;

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// When `no_config` is set, config files are skipped and the built-in
    /// defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is missing (when given explicitly),
    /// unreadable, or invalid.
    pub fn load(root_dir: &Path, cli_config_path: Option<&Path>, no_config: bool) -> Result<Config> {
        if no_config {
            return Ok(Config::default());
        }

        let config_files = ConfigDiscovery::discover(root_dir, cli_config_path)?;
        let merged = ConfigMerger::merge(&config_files)?;
        ConfigValidator::validate(&merged)?;

        Ok(merged)
    }
}
