//! Configuration validation and error reporting

use std::path::{Component, Path};

use super::types::Config;
use crate::error::Result;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        for dir in &config.exclude_dirs {
            Self::check_relative("exclude_dirs entry", dir)?;
        }

        Self::check_relative("docs_dir", config.docs_dir())?;
        Self::check_relative("root_doc", config.root_doc())?;
        Self::check_file_name("index_name", config.index_name())?;

        let ext = config.extension();
        if ext.trim().is_empty() {
            anyhow::bail!("extension cannot be empty");
        }
        if ext.contains(['/', '\\']) {
            anyhow::bail!("extension cannot contain path separators: {ext}");
        }

        Ok(())
    }

    /// A path that stays inside the repository root
    fn check_relative(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            anyhow::bail!("{field} cannot be empty");
        }

        let path = Path::new(value);
        if path.is_absolute() || path.has_root() {
            anyhow::bail!("{field} must be relative to the root directory: {value}");
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            anyhow::bail!("{field} cannot contain '..': {value}");
        }
        if !path.components().any(|c| matches!(c, Component::Normal(_))) {
            anyhow::bail!("{field} must name a path below the root directory: {value}");
        }

        Ok(())
    }

    /// A bare file name without directories
    fn check_file_name(field: &str, value: &str) -> Result<()> {
        Self::check_relative(field, value)?;

        if Path::new(value).components().count() != 1 {
            anyhow::bail!("{field} must be a file name, not a path: {value}");
        }

        Ok(())
    }
}
