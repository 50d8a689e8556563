//! Configuration file discovery for a repository root

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project config file name, looked up in the repository root
pub const PROJECT_CONFIG_NAME: &str = ".docshift.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config (`<root>/.docshift.toml`)
    pub project: Option<PathBuf>,
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files for a repository root
    ///
    /// Only the repository root and an explicit path are consulted; nothing
    /// is read from the environment or the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly requested config file does not exist.
    pub fn discover(root_dir: &Path, cli_path: Option<&Path>) -> Result<ConfigFiles> {
        let cli = match cli_path {
            Some(p) if p.is_file() => Some(p.to_path_buf()),
            Some(p) => anyhow::bail!("Config file not found: {}", p.display()),
            None => None,
        };

        let project = Some(root_dir.join(PROJECT_CONFIG_NAME)).filter(|p| p.is_file());

        Ok(ConfigFiles { cli, project })
    }

    /// Find the repository root for `start`
    ///
    /// Walks up from `start` looking for a `.git` entry. Falls back to `start`
    /// itself when no ancestor is a repository.
    #[must_use]
    pub fn find_repository_root(start: &Path) -> PathBuf {
        let mut current = start.to_path_buf();

        loop {
            if current.join(".git").exists() {
                return current;
            }

            if !current.pop() {
                break;
            }
        }

        start.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_no_configs() {
        let tmp = TempDir::new().unwrap();
        let files = ConfigDiscovery::discover(tmp.path(), None).unwrap();

        assert!(files.cli.is_none());
        assert!(files.project.is_none());
    }

    #[test]
    fn test_discover_project_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(PROJECT_CONFIG_NAME), "# config").unwrap();

        let files = ConfigDiscovery::discover(tmp.path(), None).unwrap();
        assert_eq!(files.project, Some(tmp.path().join(PROJECT_CONFIG_NAME)));
    }

    #[test]
    fn test_discover_cli_config() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("custom.toml");
        fs::write(&cli_config, "# config").unwrap();

        let files = ConfigDiscovery::discover(tmp.path(), Some(&cli_config)).unwrap();
        assert_eq!(files.cli, Some(cli_config));
    }

    #[test]
    fn test_discover_cli_config_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("nonexistent.toml");

        let err = ConfigDiscovery::discover(tmp.path(), Some(&cli_config)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_find_repository_root_from_nested_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        let nested = tmp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(ConfigDiscovery::find_repository_root(&nested), tmp.path());
    }

    #[test]
    fn test_find_repository_root_falls_back_to_start() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("plain");
        fs::create_dir(&nested).unwrap();

        // An ancestor of the temp dir could be a repository in odd setups;
        // only assert we got an ancestor-or-self of `nested`.
        let root = ConfigDiscovery::find_repository_root(&nested);
        assert!(nested.starts_with(&root));
    }
}
