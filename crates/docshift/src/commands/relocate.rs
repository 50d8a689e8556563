use std::path::PathBuf;

use anyhow::Context;
use docshift_core::config::{ConfigDiscovery, ConfigManager, ConfigValidator, Layout};
use docshift_core::relocate::{RelocationEngine, RelocationReporter};
use tracing::debug;

use super::RelocateOptions;

pub struct Relocate;

impl Relocate {
    pub fn execute(options: &RelocateOptions<'_>) -> anyhow::Result<()> {
        let root_dir = Self::get_root_dir(options)?;

        let config = ConfigManager::load(&root_dir, options.config_path, options.no_config)
            .context("Failed to load configuration")?
            .with_exclude_dirs(options.exclude_dirs.iter().cloned());
        ConfigValidator::validate(&config).context("Invalid configuration")?;

        debug!("Effective configuration: {config:?}");

        let layout = Layout::resolve(&root_dir, &config)?;
        let engine = RelocationEngine::new(layout, options.dry_run);
        let result = engine.run()?;

        let summary = RelocationReporter::generate_summary(&result);
        println!("{summary}");

        Ok(())
    }

    fn get_root_dir(options: &RelocateOptions<'_>) -> anyhow::Result<PathBuf> {
        if let Some(root_dir) = options.root_dir {
            return Ok(root_dir.to_path_buf());
        }

        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(ConfigDiscovery::find_repository_root(&current_dir))
    }
}
