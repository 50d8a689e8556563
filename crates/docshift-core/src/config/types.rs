//! Configuration types and structures

use serde::{Deserialize, Serialize};

/// Docs directory, relative to the repository root
pub const DEFAULT_DOCS_DIR: &str = "docs";
/// Root documentation file, relative to the repository root
pub const DEFAULT_ROOT_DOC: &str = "README.md";
/// Name of the copied root doc inside the docs directory
pub const DEFAULT_INDEX_NAME: &str = "index.md";
/// Extension of relocated files
pub const DEFAULT_EXTENSION: &str = "md";

/// Main configuration structure
///
/// Every field is optional in TOML; unset fields fall back to the defaults
/// above through the accessor methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory names (relative to root) whose contents are never relocated
    #[serde(default)]
    pub exclude_dirs: Vec<String>,

    /// Destination directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_dir: Option<String>,

    /// Root documentation file that is copied rather than moved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_doc: Option<String>,

    /// File name the root doc is copied to inside the docs directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    /// Extension of files to relocate, without the leading dot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Config {
    /// Append directory names to the exclusion list
    #[must_use]
    pub fn with_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Effective docs directory name
    #[must_use]
    pub fn docs_dir(&self) -> &str {
        self.docs_dir.as_deref().unwrap_or(DEFAULT_DOCS_DIR)
    }

    /// Effective root doc name
    #[must_use]
    pub fn root_doc(&self) -> &str {
        self.root_doc.as_deref().unwrap_or(DEFAULT_ROOT_DOC)
    }

    /// Effective index file name
    #[must_use]
    pub fn index_name(&self) -> &str {
        self.index_name.as_deref().unwrap_or(DEFAULT_INDEX_NAME)
    }

    /// Effective extension, leading dot stripped
    #[must_use]
    pub fn extension(&self) -> &str {
        let ext = self.extension.as_deref().unwrap_or(DEFAULT_EXTENSION);
        ext.strip_prefix('.').unwrap_or(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.exclude_dirs.is_empty());
        assert_eq!(config.docs_dir(), "docs");
        assert_eq!(config.root_doc(), "README.md");
        assert_eq!(config.index_name(), "index.md");
        assert_eq!(config.extension(), "md");
    }

    #[test]
    fn test_extension_strips_leading_dot() {
        let config = Config {
            extension: Some(".markdown".to_string()),
            ..Config::default()
        };
        assert_eq!(config.extension(), "markdown");
    }

    #[test]
    fn test_with_exclude_dirs_appends() {
        let config = Config {
            exclude_dirs: vec!["target".to_string()],
            ..Config::default()
        }
        .with_exclude_dirs(["vendor", "node_modules"]);

        assert_eq!(config.exclude_dirs, vec!["target", "vendor", "node_modules"]);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            exclude_dirs = ["site"]
            docs_dir = "book"
            "#,
        )
        .unwrap();

        assert_eq!(config.exclude_dirs, vec!["site"]);
        assert_eq!(config.docs_dir(), "book");
        assert_eq!(config.root_doc(), "README.md");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed: Result<Config, _> = toml::from_str("docs_directory = \"book\"");
        assert!(parsed.is_err());
    }
}
