use clap::Parser;
use std::path::PathBuf;

/// Documentation relocation tool
///
/// Copies README.md to docs/index.md and moves every other Markdown file into
/// docs/, keeping its path relative to the repository root
#[derive(Parser, Debug)]
#[command(name = "docshift")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Directories (relative to the root) to exclude from moving; docs/ is always excluded
    #[arg(long, num_args = 0.., value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Root directory of the repository (default: nearest ancestor containing .git)
    #[arg(long, value_name = "PATH")]
    pub root_dir: Option<PathBuf>,

    /// Perform a dry run without making any changes
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}
