//! Common types and utilities for command execution

use std::path::Path;

/// Execution options for the relocate command
pub struct RelocateOptions<'a> {
    /// Preview changes without applying (dry-run)
    pub dry_run: bool,
    /// Root directory override
    pub root_dir: Option<&'a Path>,
    /// Directory names to exclude, on top of the config
    pub exclude_dirs: &'a [String],
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}
